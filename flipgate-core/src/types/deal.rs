//! Deal records — the subject of every guardrail decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::DealId;

/// Acquisition strategy for a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    Flip,
    BuyAndHold,
    Wholesale,
}

/// Lifecycle status of a deal. Transitions happen in deal-editing flows
/// outside this engine; gates only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Candidate,
    Approved,
    Active,
    Sold,
    Dead,
}

/// A candidate or active deal.
///
/// `max_exposure_usd` and `target_roi_pct` are the policy inputs the gates
/// enforce; they are immutable from the engine's point of view.
/// `target_roi_pct` is a fraction (0.20 = 20%), matching how ROI is
/// computed everywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealSpec {
    pub id: DealId,
    pub address: String,
    pub deal_type: DealType,
    pub status: DealStatus,
    /// Hard ceiling on projected spend at the 80th percentile.
    pub max_exposure_usd: f64,
    /// Minimum acceptable ROI, as a fraction.
    pub target_roi_pct: f64,
    /// After-repair value: projected resale price once rehab completes.
    pub arv: f64,
    pub region: String,
    pub grade: String,
    /// Daily holding cost (taxes, insurance, financing).
    pub daily_burn_usd: f64,
    pub purchased_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
