//! vendors CRUD queries.

use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{Vendor, VendorId};

use super::util::*;

/// Insert or replace a vendor.
pub fn upsert_vendor(conn: &Connection, vendor: &Vendor) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO vendors (id, name, trades, region)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            vendor.id.to_string(),
            vendor.name,
            to_json(&vendor.trades)?,
            vendor.region,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Get a vendor by id.
pub fn get_vendor(
    conn: &Connection,
    id: VendorId,
) -> Result<Option<Vendor>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, trades, region FROM vendors WHERE id = ?1")
        .map_err(sqlite_err)?;

    type Row = (String, String, String, String);
    let row: Option<Row> = stmt
        .query_row(params![id.to_string()], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .optional()
        .map_err(sqlite_err)?;

    row.map(|row| {
        Ok(Vendor {
            id: VendorId::from(parse_uuid(&row.0)?),
            name: row.1,
            trades: from_json(&row.2)?,
            region: row.3,
        })
    })
    .transpose()
}
