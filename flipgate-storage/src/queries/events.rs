//! events queries — append-only by construction.
//!
//! This module deliberately exposes no UPDATE or DELETE: once written,
//! an event is immutable and serves as the audit source of truth.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use flipgate_core::errors::StorageError;
use flipgate_core::types::{AuditEvent, DealId, EventId};

use super::util::*;

/// Append one event.
pub fn append_event(conn: &Connection, event: &AuditEvent) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO events
            (id, deal_id, actor, artifact, action, diff, checksum, ts)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            event.id.to_string(),
            event.deal_id.map(|d| d.to_string()),
            event.actor,
            event.artifact,
            event.action,
            to_json(&event.diff)?,
            event.checksum,
            format_ts(event.ts),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

type EventRow = (
    String,
    Option<String>,
    String,
    String,
    String,
    String,
    String,
    String,
);

fn to_event(row: EventRow) -> Result<AuditEvent, StorageError> {
    let deal_id = row
        .1
        .map(|d| parse_uuid(&d).map(DealId::from))
        .transpose()?;
    Ok(AuditEvent {
        id: EventId::from(parse_uuid(&row.0)?),
        deal_id,
        actor: row.2,
        artifact: row.3,
        action: row.4,
        diff: from_json(&row.5)?,
        checksum: row.6,
        ts: parse_ts(&row.7)?,
    })
}

const EVENT_COLUMNS: &str = "id, deal_id, actor, artifact, action, diff, checksum, ts";

fn event_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EventRow> {
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
}

/// Get an event by id.
pub fn get_event(
    conn: &Connection,
    id: EventId,
) -> Result<Option<AuditEvent>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"))
        .map_err(sqlite_err)?;

    let row = stmt
        .query_row(params![id.to_string()], event_from_row)
        .optional()
        .map_err(sqlite_err)?;
    row.map(to_event).transpose()
}

/// Events for a deal at or after `since`, newest first. RFC3339 strings
/// in UTC compare correctly as text.
pub fn events_for_deal_since(
    conn: &Connection,
    deal: DealId,
    since: DateTime<Utc>,
) -> Result<Vec<AuditEvent>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE deal_id = ?1 AND ts >= ?2
             ORDER BY ts DESC, rowid DESC"
        ))
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![deal.to_string(), format_ts(since)], event_from_row)
        .map_err(sqlite_err)?;

    let mut events = Vec::new();
    for row in rows {
        events.push(to_event(row.map_err(sqlite_err)?)?);
    }
    Ok(events)
}
