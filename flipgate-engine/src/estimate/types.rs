//! Estimator input and output types.

use serde::{Deserialize, Serialize};

use flipgate_core::constants::DEFAULT_MONTE_CARLO_RUNS;
use flipgate_core::types::{CanonicalUnit, DealId, ScopeNodeId};

/// How the percentile band is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum UncertaintyMode {
    /// Closed-form z-factor inflation per line item.
    Parametric,
    /// Sampled band; the default. Runs are clamped into the configured
    /// bounds before sampling.
    MonteCarlo { runs: usize },
}

impl Default for UncertaintyMode {
    fn default() -> Self {
        Self::MonteCarlo {
            runs: DEFAULT_MONTE_CARLO_RUNS,
        }
    }
}

/// An estimate request. `region`/`grade` default to the deal's own.
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    pub deal_id: DealId,
    pub region: Option<String>,
    pub grade: Option<String>,
    pub mode: UncertaintyMode,
}

impl EstimateRequest {
    pub fn new(deal_id: DealId) -> Self {
        Self {
            deal_id,
            region: None,
            grade: None,
            mode: UncertaintyMode::default(),
        }
    }

    pub fn parametric(deal_id: DealId) -> Self {
        Self {
            mode: UncertaintyMode::Parametric,
            ..Self::new(deal_id)
        }
    }
}

/// Percentile band restricted to one trade's line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeBreakdown {
    pub trade: String,
    pub baseline: f64,
    pub p50: f64,
    pub p80: f64,
    pub p95: f64,
    pub line_count: usize,
}

/// One of the top contributors to the uncertainty gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostDriver {
    pub node_id: ScopeNodeId,
    pub trade: String,
    pub task: String,
    /// This item's contribution to `p80 − baseline`, as a fraction.
    pub uncertainty_share: f64,
    /// This item's share of the baseline cost, as a fraction.
    pub baseline_share: f64,
}

/// A scope line skipped because no reference-price row matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingCostModel {
    pub node_id: ScopeNodeId,
    pub trade: String,
    pub task: String,
    /// The unit string as entered on the scope node.
    pub unit: String,
    /// The canonical unit the lookup was attempted with.
    pub canonical_unit: CanonicalUnit,
}

/// Provenance for an estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateMetadata {
    pub mode: String,
    pub runs: Option<usize>,
    pub seed: Option<u64>,
    pub region: String,
    pub grade: String,
    /// Skipped lines. Non-empty means the estimate is a LOWER BOUND.
    pub missing_cost_models: Vec<MissingCostModel>,
    pub unit_warnings: Vec<String>,
}

/// A probabilistic cost estimate for a deal's scope of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub deal_id: DealId,
    pub baseline: f64,
    pub p50: f64,
    pub p80: f64,
    pub p95: f64,
    pub by_trade: Vec<TradeBreakdown>,
    pub drivers: Vec<CostDriver>,
    pub metadata: EstimateMetadata,
}

/// The max-exposure decision for a deal: `passed` iff the estimate's p80
/// stays at or under the deal's hard cost ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureCheck {
    pub deal_id: DealId,
    pub passed: bool,
    pub p80: f64,
    pub max_exposure_usd: f64,
    /// `max(0, p80 − max_exposure_usd)`.
    pub over_by: f64,
    /// Top uncertainty drivers; populated only on failure.
    pub drivers: Vec<CostDriver>,
}

/// One costed scope line, with its resolved uncertainty fractions.
#[derive(Debug, Clone)]
pub(crate) struct CostedLine {
    pub node_id: ScopeNodeId,
    pub trade: String,
    pub task: String,
    pub material: f64,
    pub labor: f64,
    pub contingency: f64,
    pub risk_premium: f64,
    pub total: f64,
    pub material_uncertainty: f64,
    pub labor_uncertainty: f64,
    /// Cost-weighted average of material and labor uncertainty.
    pub combined_uncertainty: f64,
}
