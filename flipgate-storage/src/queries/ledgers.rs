//! ledgers CRUD queries. Bucket breakdowns are stored as JSON columns.

use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{BudgetLedger, DealId, VarianceState};

use super::util::*;

/// Insert or replace a deal's ledger.
pub fn upsert_ledger(
    conn: &Connection,
    ledger: &BudgetLedger,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO ledgers
            (deal_id, baseline, committed, actuals, variance, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ledger.deal_id.to_string(),
            to_json(&ledger.baseline)?,
            to_json(&ledger.committed)?,
            to_json(&ledger.actuals)?,
            to_json(&ledger.variance)?,
            format_ts(ledger.updated_at),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Get a deal's ledger.
pub fn ledger_for_deal(
    conn: &Connection,
    deal: DealId,
) -> Result<Option<BudgetLedger>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT deal_id, baseline, committed, actuals, variance, updated_at
             FROM ledgers WHERE deal_id = ?1",
        )
        .map_err(sqlite_err)?;

    type Row = (String, String, String, String, String, String);
    let row: Option<Row> = stmt
        .query_row(params![deal.to_string()], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
        .optional()
        .map_err(sqlite_err)?;

    row.map(|row| {
        Ok(BudgetLedger {
            deal_id: DealId::from(parse_uuid(&row.0)?),
            baseline: from_json(&row.1)?,
            committed: from_json(&row.2)?,
            actuals: from_json(&row.3)?,
            variance: from_json(&row.4)?,
            updated_at: parse_ts(&row.5)?,
        })
    })
    .transpose()
}

/// Replace the frozen-trades list inside the variance state.
pub fn set_frozen_trades(
    conn: &Connection,
    deal: DealId,
    frozen: &[String],
) -> Result<(), StorageError> {
    let current: Option<String> = conn
        .query_row(
            "SELECT variance FROM ledgers WHERE deal_id = ?1",
            params![deal.to_string()],
            |row| row.get(0),
        )
        .optional()
        .map_err(sqlite_err)?;

    let Some(current) = current else {
        return Err(StorageError::Sqlite {
            message: format!("no ledger for deal {deal}"),
        });
    };

    let mut variance: VarianceState = from_json(&current)?;
    variance.frozen_trades = frozen.to_vec();

    conn.execute(
        "UPDATE ledgers SET variance = ?1 WHERE deal_id = ?2",
        params![to_json(&variance)?, deal.to_string()],
    )
    .map_err(sqlite_err)?;
    Ok(())
}
