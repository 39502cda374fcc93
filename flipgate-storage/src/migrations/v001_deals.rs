//! V001 migration: deal intake tables.
//!
//! Tables: deals, scope_nodes, cost_models, region_policies, vendors

pub const MIGRATION_SQL: &str = r#"
-- Deals table
CREATE TABLE IF NOT EXISTS deals (
    id TEXT PRIMARY KEY,
    address TEXT NOT NULL,
    deal_type TEXT NOT NULL,
    status TEXT NOT NULL,
    max_exposure_usd REAL NOT NULL,
    target_roi_pct REAL NOT NULL,
    arv REAL NOT NULL,
    region TEXT NOT NULL,
    grade TEXT NOT NULL,
    daily_burn_usd REAL NOT NULL DEFAULT 0,
    purchased_at TEXT,
    created_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_deals_status ON deals(status);
CREATE INDEX IF NOT EXISTS idx_deals_region ON deals(region, grade);

-- Scope-of-work lines
CREATE TABLE IF NOT EXISTS scope_nodes (
    id TEXT PRIMARY KEY,
    deal_id TEXT NOT NULL REFERENCES deals(id),
    trade TEXT NOT NULL,
    task TEXT NOT NULL,
    qty_value REAL NOT NULL,
    qty_unit TEXT NOT NULL,
    qty_method TEXT NOT NULL,
    finish_level TEXT NOT NULL,
    assumptions TEXT NOT NULL DEFAULT '[]'
) STRICT;

CREATE INDEX IF NOT EXISTS idx_scope_nodes_deal ON scope_nodes(deal_id);

-- Reference prices
CREATE TABLE IF NOT EXISTS cost_models (
    region TEXT NOT NULL,
    grade TEXT NOT NULL,
    trade TEXT NOT NULL,
    task TEXT NOT NULL,
    unit TEXT NOT NULL,
    material_per_unit REAL NOT NULL,
    labor_per_unit REAL NOT NULL,
    contingency_pct REAL NOT NULL,
    risk_premium_pct REAL NOT NULL,
    PRIMARY KEY (region, grade, trade, task, unit)
) STRICT;

-- Regional policy defaults
CREATE TABLE IF NOT EXISTS region_policies (
    region TEXT NOT NULL,
    grade TEXT NOT NULL,
    max_exposure_usd REAL NOT NULL,
    target_roi_pct REAL NOT NULL,
    contingency_target_pct REAL NOT NULL,
    PRIMARY KEY (region, grade)
) STRICT;

-- Vendors
CREATE TABLE IF NOT EXISTS vendors (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    trades TEXT NOT NULL DEFAULT '[]',
    region TEXT NOT NULL
) STRICT;
"#;
