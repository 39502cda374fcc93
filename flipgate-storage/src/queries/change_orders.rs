//! change_orders CRUD queries.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{ChangeOrder, ChangeOrderId, ChangeOrderStatus, DealId};

use super::util::*;

/// Insert or replace a change order.
pub fn upsert_change_order(
    conn: &Connection,
    co: &ChangeOrder,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO change_orders
            (id, deal_id, trade, delta_usd, impact_days, reason, status,
             created_at, decided_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            co.id.to_string(),
            co.deal_id.to_string(),
            co.trade,
            co.delta_usd,
            co.impact_days,
            co.reason,
            enum_to_str(&co.status)?,
            format_ts(co.created_at),
            co.decided_at.map(format_ts),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

type CoRow = (
    String,
    String,
    String,
    f64,
    i32,
    String,
    String,
    String,
    Option<String>,
);

fn to_change_order(row: CoRow) -> Result<ChangeOrder, StorageError> {
    Ok(ChangeOrder {
        id: ChangeOrderId::from(parse_uuid(&row.0)?),
        deal_id: DealId::from(parse_uuid(&row.1)?),
        trade: row.2,
        delta_usd: row.3,
        impact_days: row.4,
        reason: row.5,
        status: enum_from_str(&row.6)?,
        created_at: parse_ts(&row.7)?,
        decided_at: parse_opt_ts(row.8)?,
    })
}

const CO_COLUMNS: &str = "id, deal_id, trade, delta_usd, impact_days, reason, \
                          status, created_at, decided_at";

fn co_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CoRow> {
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
}

/// Get a change order by id.
pub fn get_change_order(
    conn: &Connection,
    id: ChangeOrderId,
) -> Result<Option<ChangeOrder>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {CO_COLUMNS} FROM change_orders WHERE id = ?1"
        ))
        .map_err(sqlite_err)?;

    let row = stmt
        .query_row(params![id.to_string()], co_from_row)
        .optional()
        .map_err(sqlite_err)?;
    row.map(to_change_order).transpose()
}

/// All change orders for a deal.
pub fn change_orders_for_deal(
    conn: &Connection,
    deal: DealId,
) -> Result<Vec<ChangeOrder>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {CO_COLUMNS} FROM change_orders WHERE deal_id = ?1
             ORDER BY created_at"
        ))
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![deal.to_string()], co_from_row)
        .map_err(sqlite_err)?;

    let mut orders = Vec::new();
    for row in rows {
        orders.push(to_change_order(row.map_err(sqlite_err)?)?);
    }
    Ok(orders)
}

/// Record a gate decision on a change order.
pub fn transition_change_order(
    conn: &Connection,
    id: ChangeOrderId,
    status: ChangeOrderStatus,
    decided_at: DateTime<Utc>,
) -> Result<(), StorageError> {
    let updated = conn
        .execute(
            "UPDATE change_orders SET status = ?1, decided_at = ?2 WHERE id = ?3",
            params![enum_to_str(&status)?, format_ts(decided_at), id.to_string()],
        )
        .map_err(sqlite_err)?;

    if updated == 0 {
        return Err(StorageError::Sqlite {
            message: format!("no change order {id} to transition"),
        });
    }
    Ok(())
}
