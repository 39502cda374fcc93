//! region_policies queries.

use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::RegionPolicy;

use super::util::sqlite_err;

/// Insert or replace a regional policy row.
pub fn upsert_policy(
    conn: &Connection,
    policy: &RegionPolicy,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO region_policies
            (region, grade, max_exposure_usd, target_roi_pct,
             contingency_target_pct)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            policy.region,
            policy.grade,
            policy.max_exposure_usd,
            policy.target_roi_pct,
            policy.contingency_target_pct,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Policy defaults for (region, grade).
pub fn policy_for(
    conn: &Connection,
    region: &str,
    grade: &str,
) -> Result<Option<RegionPolicy>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT region, grade, max_exposure_usd, target_roi_pct,
                    contingency_target_pct
             FROM region_policies WHERE region = ?1 AND grade = ?2",
        )
        .map_err(sqlite_err)?;

    stmt.query_row(params![region, grade], |row| {
        Ok(RegionPolicy {
            region: row.get(0)?,
            grade: row.get(1)?,
            max_exposure_usd: row.get(2)?,
            target_roi_pct: row.get(3)?,
            contingency_target_pct: row.get(4)?,
        })
    })
    .optional()
    .map_err(sqlite_err)
}
