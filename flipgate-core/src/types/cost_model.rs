//! Reference-price rows and regional policy defaults.

use serde::{Deserialize, Serialize};

use super::units::CanonicalUnit;

/// A reference-price row keyed by (region, grade, trade, task, unit).
/// Static reference data; looked up, never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModel {
    pub region: String,
    pub grade: String,
    pub trade: String,
    pub task: String,
    pub unit: CanonicalUnit,
    pub material_per_unit: f64,
    pub labor_per_unit: f64,
    /// Contingency add-on, as a fraction of the line subtotal.
    pub contingency_pct: f64,
    /// Risk premium add-on, as a fraction of the line subtotal.
    pub risk_premium_pct: f64,
}

/// Region+grade policy defaults consumed by the truth panel. Independent
/// of any per-deal override values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionPolicy {
    pub region: String,
    pub grade: String,
    pub max_exposure_usd: f64,
    /// Fraction, like `DealSpec::target_roi_pct`.
    pub target_roi_pct: f64,
    /// Contingency budget target, as a fraction of baseline.
    pub contingency_target_pct: f64,
}
