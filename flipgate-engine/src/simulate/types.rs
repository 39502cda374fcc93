//! Change-order simulation output types.

use serde::{Deserialize, Serialize};

use flipgate_core::types::DealId;

/// Cost percentiles plus ROI at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub p50: f64,
    pub p80: f64,
    pub p95: f64,
    /// `(arv − cost) / cost`, as a fraction; 0 when cost ≤ 0.
    pub roi_pct: f64,
}

/// The net movement a change order causes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationDeltas {
    pub p80: f64,
    pub cost: f64,
    pub roi_pct: f64,
    pub impact_days: i32,
}

/// Before/after financial effect of a proposed change order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoSimulation {
    pub deal_id: DealId,
    /// Committed-else-baseline spend plus actuals — what the change is
    /// measured against.
    pub base_cost: f64,
    pub delta_usd: f64,
    pub impact_days: i32,
    pub before: RiskSnapshot,
    pub after: RiskSnapshot,
    pub deltas: SimulationDeltas,
}

/// The change-order gate decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoEvaluation {
    pub simulation: CoSimulation,
    /// True when the post-change p80 breaches the deal's exposure cap.
    pub exposure_violation: bool,
    /// True when the post-change ROI drops below the deal's target.
    pub roi_violation: bool,
    pub approved: bool,
    /// Human-readable verdict; exposure is reported before ROI when both
    /// are violated.
    pub message: String,
}
