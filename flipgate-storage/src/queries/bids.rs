//! bids CRUD queries. Item lists are stored as JSON.

use rusqlite::{params, Connection};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{Bid, BidId, DealId, VendorId};

use super::util::*;

/// Insert or replace a bid.
pub fn upsert_bid(conn: &Connection, bid: &Bid) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO bids
            (id, deal_id, vendor_id, items, subtotal_usd, status, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            bid.id.to_string(),
            bid.deal_id.to_string(),
            bid.vendor_id.to_string(),
            to_json(&bid.items)?,
            bid.subtotal_usd,
            enum_to_str(&bid.status)?,
            format_ts(bid.submitted_at),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// All bids for a deal.
pub fn bids_for_deal(
    conn: &Connection,
    deal: DealId,
) -> Result<Vec<Bid>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, deal_id, vendor_id, items, subtotal_usd, status,
                    submitted_at
             FROM bids WHERE deal_id = ?1 ORDER BY submitted_at",
        )
        .map_err(sqlite_err)?;

    type Row = (String, String, String, String, f64, String, String);
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
            ))
        })
        .map_err(sqlite_err)?;

    let mut bids = Vec::new();
    for row in rows {
        let row: Row = row.map_err(sqlite_err)?;
        bids.push(Bid {
            id: BidId::from(parse_uuid(&row.0)?),
            deal_id: DealId::from(parse_uuid(&row.1)?),
            vendor_id: VendorId::from(parse_uuid(&row.2)?),
            items: from_json(&row.3)?,
            subtotal_usd: row.4,
            status: enum_from_str(&row.5)?,
            submitted_at: parse_ts(&row.6)?,
        });
    }
    Ok(bids)
}
