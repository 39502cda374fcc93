//! Shared constants for the Flipgate guardrail engine.
//!
//! These back the `Default` impls in `config`; runtime code reads the
//! config structs, not these constants directly.

/// Flipgate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Estimator ----

/// Default Monte Carlo run count.
pub const DEFAULT_MONTE_CARLO_RUNS: usize = 1_000;

/// Minimum Monte Carlo run count; smaller requests are raised to this.
pub const MIN_MONTE_CARLO_RUNS: usize = 100;

/// Maximum Monte Carlo run count; larger requests are capped so an
/// estimate can never monopolize a request-serving thread.
pub const MAX_MONTE_CARLO_RUNS: usize = 20_000;

/// Parametric z-factor for the 80th percentile.
pub const Z_P80: f64 = 0.84;

/// Parametric z-factor for the 95th percentile.
pub const Z_P95: f64 = 1.65;

/// Material uncertainty fraction for trades without a table entry.
pub const DEFAULT_MATERIAL_UNCERTAINTY: f64 = 0.20;

/// Labor uncertainty fraction for trades without a table entry.
pub const DEFAULT_LABOR_UNCERTAINTY: f64 = 0.15;

/// Number of cost drivers reported per estimate.
pub const ESTIMATE_DRIVER_COUNT: usize = 5;

// ---- Unit normalization ----

/// Square feet per roofing square.
pub const ROOFING_SQUARE_SQFT: f64 = 100.0;

// ---- Change-order simulation ----

/// Risk multiplier applied to base cost for the p50 band.
pub const BEFORE_P50_MULTIPLIER: f64 = 1.00;

/// Risk multiplier applied to base cost for the p80 band.
pub const BEFORE_P80_MULTIPLIER: f64 = 1.10;

/// Risk multiplier applied to base cost for the p95 band.
pub const BEFORE_P95_MULTIPLIER: f64 = 1.18;

/// Contingency loading on a cost-increasing change order.
pub const INCREASE_CONTINGENCY_MULTIPLIER: f64 = 1.10;

/// Risk loading on a cost-increasing change order.
pub const INCREASE_RISK_MULTIPLIER: f64 = 1.18;

// ---- Gates ----

/// Maximum acceptable bid spread, as a FRACTION of the median.
/// `BidComparison::spread_pct` is a percent value; the gate converts
/// explicitly before comparing against this.
pub const DEFAULT_MAX_BID_SPREAD: f64 = 0.15;

/// Budget variance (percent) above which non-critical trades freeze.
pub const VARIANCE_TIER1_PCT: f64 = 3.0;

/// Budget variance (percent) above which tier-2 escalation fires.
pub const VARIANCE_TIER2_PCT: f64 = 7.0;

/// Trades never frozen by a tier-1 variance response.
pub const DEFAULT_CRITICAL_TRADES: [&str; 4] =
    ["structural", "roofing", "electrical", "plumbing"];

// ---- Panels ----

/// Trailing window for panel event scans, in days.
pub const PANEL_EVENT_WINDOW_DAYS: i64 = 7;

/// Planned milestone count for the motion panel.
pub const PLANNED_MILESTONES: usize = 6;

/// Exposure headroom (percent) below which the truth panel recommends
/// renegotiating scope or price.
pub const HEADROOM_WARN_PCT: f64 = 5.0;

/// Base score for the vendor reliability heuristic.
pub const VENDOR_RELIABILITY_BASE: f64 = 50.0;

/// Reliability points per invoice on record.
pub const VENDOR_RELIABILITY_PER_INVOICE: f64 = 10.0;

/// Reliability points per bid on record.
pub const VENDOR_RELIABILITY_PER_BID: f64 = 5.0;

/// Reliability score ceiling.
pub const VENDOR_RELIABILITY_MAX: f64 = 100.0;
