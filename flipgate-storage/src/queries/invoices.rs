//! invoices CRUD queries.

use rusqlite::{params, Connection};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{DealId, Invoice, InvoiceId, VendorId};

use super::util::*;

/// Insert or replace an invoice.
pub fn upsert_invoice(
    conn: &Connection,
    invoice: &Invoice,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO invoices
            (id, deal_id, vendor_id, trade, amount_usd, status, submitted_at,
             approved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            invoice.id.to_string(),
            invoice.deal_id.to_string(),
            invoice.vendor_id.to_string(),
            invoice.trade,
            invoice.amount_usd,
            enum_to_str(&invoice.status)?,
            format_ts(invoice.submitted_at),
            invoice.approved_at.map(format_ts),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// All invoices for a deal.
pub fn invoices_for_deal(
    conn: &Connection,
    deal: DealId,
) -> Result<Vec<Invoice>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, deal_id, vendor_id, trade, amount_usd, status,
                    submitted_at, approved_at
             FROM invoices WHERE deal_id = ?1 ORDER BY submitted_at",
        )
        .map_err(sqlite_err)?;

    type Row = (
        String,
        String,
        String,
        String,
        f64,
        String,
        String,
        Option<String>,
    );
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
            ))
        })
        .map_err(sqlite_err)?;

    let mut invoices = Vec::new();
    for row in rows {
        let row: Row = row.map_err(sqlite_err)?;
        invoices.push(Invoice {
            id: InvoiceId::from(parse_uuid(&row.0)?),
            deal_id: DealId::from(parse_uuid(&row.1)?),
            vendor_id: VendorId::from(parse_uuid(&row.2)?),
            trade: row.3,
            amount_usd: row.4,
            status: enum_from_str(&row.5)?,
            submitted_at: parse_ts(&row.6)?,
            approved_at: parse_opt_ts(row.7)?,
        });
    }
    Ok(invoices)
}
