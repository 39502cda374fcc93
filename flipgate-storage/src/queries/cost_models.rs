//! cost_models reference-price queries.

use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{CanonicalUnit, CostModel};

use super::util::*;

/// Insert or replace a reference-price row.
pub fn upsert_cost_model(
    conn: &Connection,
    model: &CostModel,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO cost_models
            (region, grade, trade, task, unit, material_per_unit,
             labor_per_unit, contingency_pct, risk_premium_pct)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            model.region,
            model.grade,
            model.trade,
            model.task,
            model.unit.as_str(),
            model.material_per_unit,
            model.labor_per_unit,
            model.contingency_pct,
            model.risk_premium_pct,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Look up the row for (region, grade, trade, task, unit).
pub fn find_cost_model(
    conn: &Connection,
    region: &str,
    grade: &str,
    trade: &str,
    task: &str,
    unit: CanonicalUnit,
) -> Result<Option<CostModel>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT region, grade, trade, task, unit, material_per_unit,
                    labor_per_unit, contingency_pct, risk_premium_pct
             FROM cost_models
             WHERE region = ?1 AND grade = ?2 AND trade = ?3 AND task = ?4
               AND unit = ?5",
        )
        .map_err(sqlite_err)?;

    type Row = (String, String, String, String, String, f64, f64, f64, f64);
    let row: Option<Row> = stmt
        .query_row(params![region, grade, trade, task, unit.as_str()], |row| {
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
        .optional()
        .map_err(sqlite_err)?;

    row.map(|row| {
        let unit = CanonicalUnit::parse(&row.4).ok_or_else(|| {
            StorageError::Serialization {
                message: format!("bad canonical unit '{}'", row.4),
            }
        })?;
        Ok(CostModel {
            region: row.0,
            grade: row.1,
            trade: row.2,
            task: row.3,
            unit,
            material_per_unit: row.5,
            labor_per_unit: row.6,
            contingency_pct: row.7,
            risk_premium_pct: row.8,
        })
    })
    .transpose()
}
