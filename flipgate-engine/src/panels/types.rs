//! Panel projection types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flipgate_core::types::{DealId, RegionPolicy, VendorId};

use crate::gates::GateAction;

/// Compact estimate view for the truth panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub baseline: f64,
    pub p50: f64,
    pub p80: f64,
    pub p95: f64,
    /// Scope lines skipped for missing reference prices; non-zero means
    /// the band is a lower bound.
    pub missing_cost_models: usize,
}

/// Most recent gate decision per artifact within the scan window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateState {
    pub artifact: String,
    pub actor: String,
    pub action: GateAction,
    pub ts: DateTime<Utc>,
}

/// Rule-driven next steps surfaced on the truth panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    NegotiateScopeOrPrice,
    ReviewScopeMismatchBids,
    RunCoSimulation,
}

/// Contingency pool consumption derived from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyStatus {
    /// Target pool as a fraction of baseline, from regional policy.
    pub target_pct: f64,
    pub pool_usd: f64,
    pub consumed_usd: f64,
    pub consumed_pct: f64,
}

/// Risk/"truth" panel: where the deal stands against policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthPanel {
    pub deal_id: DealId,
    pub policy: Option<RegionPolicy>,
    pub estimate: EstimateSummary,
    /// Percent of the exposure ceiling still unspoken for at p80.
    pub headroom_pct: f64,
    pub contingency: Option<ContingencyStatus>,
    pub gate_states: Vec<GateState>,
    pub actions: Vec<RecommendedAction>,
}

/// One trade row on the money panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSpendRow {
    pub trade: String,
    pub baseline: f64,
    pub committed: f64,
    pub actual: f64,
    pub frozen: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOrderSummary {
    pub count: usize,
    pub approved_count: usize,
    /// Net delta of approved change orders.
    pub net_impact_usd: f64,
    pub avg_approval_latency_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub count: usize,
    pub approved_count: usize,
    pub avg_approval_latency_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnSummary {
    pub daily_burn_usd: f64,
    pub days_held: i64,
    pub total_burn_usd: f64,
}

/// Money panel: where the dollars are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyPanel {
    pub deal_id: DealId,
    pub by_trade: Vec<TradeSpendRow>,
    pub change_orders: ChangeOrderSummary,
    pub invoices: InvoiceSummary,
    pub burn: BurnSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneProgress {
    pub completed: usize,
    pub planned: usize,
    pub completion_pct: f64,
}

/// A recent blocking gate decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottleneck {
    pub artifact: String,
    pub actor: String,
    pub action: GateAction,
    pub ts: DateTime<Utc>,
}

/// Coarse vendor responsiveness score. A scoring stand-in on activity
/// counts, not a statistically derived reliability measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorReliability {
    pub vendor_id: VendorId,
    pub score: f64,
    pub invoice_count: usize,
    pub bid_count: usize,
}

/// Progress/"motion" panel: is the deal moving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionPanel {
    pub deal_id: DealId,
    pub milestones: MilestoneProgress,
    pub bottlenecks: Vec<Bottleneck>,
    pub vendor_reliability: Vec<VendorReliability>,
}
