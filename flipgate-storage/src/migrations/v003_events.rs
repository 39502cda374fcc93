//! V003 migration: the append-only audit event table.
//!
//! No UPDATE or DELETE ever touches this table; the query layer exposes
//! only append and reads.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    deal_id TEXT,
    actor TEXT NOT NULL,
    artifact TEXT NOT NULL,
    action TEXT NOT NULL,
    diff TEXT NOT NULL DEFAULT '[]',
    checksum TEXT NOT NULL,
    ts TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_events_deal ON events(deal_id);
CREATE INDEX IF NOT EXISTS idx_events_ts ON events(ts);
CREATE INDEX IF NOT EXISTS idx_events_actor ON events(actor);
"#;
