//! deals CRUD queries.

use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{DealId, DealSpec};

use super::util::*;

/// Insert or replace a deal record.
pub fn upsert_deal(conn: &Connection, deal: &DealSpec) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO deals
            (id, address, deal_type, status, max_exposure_usd, target_roi_pct,
             arv, region, grade, daily_burn_usd, purchased_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            deal.id.to_string(),
            deal.address,
            enum_to_str(&deal.deal_type)?,
            enum_to_str(&deal.status)?,
            deal.max_exposure_usd,
            deal.target_roi_pct,
            deal.arv,
            deal.region,
            deal.grade,
            deal.daily_burn_usd,
            deal.purchased_at.map(format_ts),
            format_ts(deal.created_at),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Raw row shape, converted after the rusqlite closure.
type DealRow = (
    String,
    String,
    String,
    String,
    f64,
    f64,
    f64,
    String,
    String,
    f64,
    Option<String>,
    String,
);

fn to_deal(row: DealRow) -> Result<DealSpec, StorageError> {
    Ok(DealSpec {
        id: DealId::from(parse_uuid(&row.0)?),
        address: row.1,
        deal_type: enum_from_str(&row.2)?,
        status: enum_from_str(&row.3)?,
        max_exposure_usd: row.4,
        target_roi_pct: row.5,
        arv: row.6,
        region: row.7,
        grade: row.8,
        daily_burn_usd: row.9,
        purchased_at: parse_opt_ts(row.10)?,
        created_at: parse_ts(&row.11)?,
    })
}

/// Get a deal by id.
pub fn get_deal(
    conn: &Connection,
    id: DealId,
) -> Result<Option<DealSpec>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, address, deal_type, status, max_exposure_usd,
                    target_roi_pct, arv, region, grade, daily_burn_usd,
                    purchased_at, created_at
             FROM deals WHERE id = ?1",
        )
        .map_err(sqlite_err)?;

    let row: Option<DealRow> = stmt
        .query_row(params![id.to_string()], |row| {
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
                row.get(9)?,
                row.get(10)?,
                row.get(11)?,
            ))
        })
        .optional()
        .map_err(sqlite_err)?;

    row.map(to_deal).transpose()
}
