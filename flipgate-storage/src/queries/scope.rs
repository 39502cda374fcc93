//! scope_nodes CRUD queries.

use rusqlite::{params, Connection};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{DealId, Quantity, ScopeNode, ScopeNodeId};

use super::util::*;

/// Insert a scope line.
pub fn insert_scope_node(
    conn: &Connection,
    node: &ScopeNode,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO scope_nodes
            (id, deal_id, trade, task, qty_value, qty_unit, qty_method,
             finish_level, assumptions)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            node.id.to_string(),
            node.deal_id.to_string(),
            node.trade,
            node.task,
            node.quantity.value,
            node.quantity.unit,
            enum_to_str(&node.quantity.method)?,
            node.finish_level,
            to_json(&node.assumptions)?,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

type ScopeRow = (
    String,
    String,
    String,
    String,
    f64,
    String,
    String,
    String,
    String,
);

fn to_node(row: ScopeRow) -> Result<ScopeNode, StorageError> {
    Ok(ScopeNode {
        id: ScopeNodeId::from(parse_uuid(&row.0)?),
        deal_id: DealId::from(parse_uuid(&row.1)?),
        trade: row.2,
        task: row.3,
        quantity: Quantity {
            value: row.4,
            unit: row.5,
            method: enum_from_str(&row.6)?,
        },
        finish_level: row.7,
        assumptions: from_json(&row.8)?,
    })
}

/// All scope lines for a deal.
pub fn scope_for_deal(
    conn: &Connection,
    deal: DealId,
) -> Result<Vec<ScopeNode>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, deal_id, trade, task, qty_value, qty_unit, qty_method,
                    finish_level, assumptions
             FROM scope_nodes WHERE deal_id = ?1",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![deal.to_string()], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
            ))
        })
        .map_err(sqlite_err)?;

    let mut nodes = Vec::new();
    for row in rows {
        nodes.push(to_node(row.map_err(sqlite_err)?)?);
    }
    Ok(nodes)
}
