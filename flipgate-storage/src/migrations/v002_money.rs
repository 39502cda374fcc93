//! V002 migration: money-flow tables.
//!
//! Tables: ledgers, bids, invoices, change_orders

pub const MIGRATION_SQL: &str = r#"
-- Budget ledgers, one per deal; bucket breakdowns stored as JSON
CREATE TABLE IF NOT EXISTS ledgers (
    deal_id TEXT PRIMARY KEY REFERENCES deals(id),
    baseline TEXT NOT NULL,
    committed TEXT NOT NULL,
    actuals TEXT NOT NULL,
    variance TEXT NOT NULL,
    updated_at TEXT NOT NULL
) STRICT;

-- Vendor bids; item lists stored as JSON
CREATE TABLE IF NOT EXISTS bids (
    id TEXT PRIMARY KEY,
    deal_id TEXT NOT NULL REFERENCES deals(id),
    vendor_id TEXT NOT NULL REFERENCES vendors(id),
    items TEXT NOT NULL DEFAULT '[]',
    subtotal_usd REAL NOT NULL,
    status TEXT NOT NULL,
    submitted_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_bids_deal ON bids(deal_id);
CREATE INDEX IF NOT EXISTS idx_bids_status ON bids(status);

-- Invoices
CREATE TABLE IF NOT EXISTS invoices (
    id TEXT PRIMARY KEY,
    deal_id TEXT NOT NULL REFERENCES deals(id),
    vendor_id TEXT NOT NULL REFERENCES vendors(id),
    trade TEXT NOT NULL,
    amount_usd REAL NOT NULL,
    status TEXT NOT NULL,
    submitted_at TEXT NOT NULL,
    approved_at TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_invoices_deal ON invoices(deal_id);

-- Change orders
CREATE TABLE IF NOT EXISTS change_orders (
    id TEXT PRIMARY KEY,
    deal_id TEXT NOT NULL REFERENCES deals(id),
    trade TEXT NOT NULL,
    delta_usd REAL NOT NULL,
    impact_days INTEGER NOT NULL,
    reason TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    decided_at TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_change_orders_deal ON change_orders(deal_id);
CREATE INDEX IF NOT EXISTS idx_change_orders_status ON change_orders(status);
"#;
