//! Read-side panel aggregators.
//!
//! Three human-facing projections over estimator output, the ledger, and
//! recent audit events. Panels never mutate anything; every builder
//! takes an explicit `as_of` instant so projections are reproducible.

mod money;
mod motion;
mod truth;
mod types;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use flipgate_core::config::EngineConfig;
use flipgate_core::errors::PanelError;
use flipgate_core::traits::Store;
use flipgate_core::types::{AuditEvent, DealId};

pub use types::{
    Bottleneck, BurnSummary, ChangeOrderSummary, ContingencyStatus,
    EstimateSummary, GateState, InvoiceSummary, MilestoneProgress, MoneyPanel,
    MotionPanel, RecommendedAction, TradeSpendRow, TruthPanel,
    VendorReliability,
};

/// Panel builder over the host store.
pub struct Panels {
    store: Arc<dyn Store>,
    config: Arc<EngineConfig>,
}

impl Panels {
    pub fn new(store: Arc<dyn Store>, config: Arc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// Risk panel: estimate band vs policy, gate states, and
    /// rule-driven recommended actions.
    pub fn build_truth_panel(
        &self,
        deal_id: DealId,
        as_of: DateTime<Utc>,
    ) -> Result<TruthPanel, PanelError> {
        truth::build(&self.store, &self.config, deal_id, as_of)
    }

    /// Money panel: per-trade spend, change-order and invoice summaries,
    /// and holding burn.
    pub fn build_money_panel(
        &self,
        deal_id: DealId,
        as_of: DateTime<Utc>,
    ) -> Result<MoneyPanel, PanelError> {
        money::build(&self.store, deal_id, as_of)
    }

    /// Motion panel: milestone completion, bottlenecks, and vendor
    /// reliability.
    pub fn build_motion_panel(
        &self,
        deal_id: DealId,
        as_of: DateTime<Utc>,
    ) -> Result<MotionPanel, PanelError> {
        motion::build(&self.store, &self.config, deal_id, as_of)
    }
}

/// Gate events for a deal inside the trailing scan window, newest first.
fn gate_events_in_window(
    store: &Arc<dyn Store>,
    config: &EngineConfig,
    deal_id: DealId,
    as_of: DateTime<Utc>,
) -> Result<Vec<AuditEvent>, PanelError> {
    let since = as_of - Duration::days(config.panels.event_window_days);
    let events = store.events_for_deal_since(deal_id, since)?;
    Ok(events
        .into_iter()
        .filter(|e| e.ts <= as_of && e.actor.starts_with("system:G"))
        .collect())
}
