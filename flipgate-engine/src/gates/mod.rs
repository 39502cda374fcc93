//! The guardrail gate state machine (G1–G4).
//!
//! Four independent gates, each a pure decision function plus an audit
//! event write:
//!
//! | Gate | Trigger                | Actions                        |
//! |------|------------------------|--------------------------------|
//! | G1   | deal approval          | APPROVE / BLOCK                |
//! | G2   | bid submission         | AWARD / BLOCK                  |
//! | G3   | invoice/actuals update | OK / FREEZE_TIER1 / ESCALATE_TIER2 |
//! | G4   | change-order proposal  | APPROVE_CO / DENY              |
//!
//! Gates are idempotent re-evaluations: unchanged inputs yield the same
//! action and the same payload values. Evaluations for one deal are
//! serialized behind a per-deal lock.

mod locks;
mod types;

use std::sync::Arc;

use serde_json::{json, Value};

use flipgate_core::config::EngineConfig;
use flipgate_core::errors::{BidError, ErrorCode, GateError};
use flipgate_core::traits::{JobQueue, Store};
use flipgate_core::types::{
    BidStatus, ChangeOrderId, ChangeOrderStatus, DealId,
};

use crate::audit::{EventLog, WriteEvent};
use crate::bids::compare_bids;
use crate::estimate::Estimator;
use crate::simulate::CoSimulator;

use locks::DealLocks;
pub use types::{GateAction, GateId, GateOutcome};

/// Orchestrates the four guardrail gates against deal-specific policy
/// thresholds, recording every decision in the audit log.
pub struct GateEngine {
    store: Arc<dyn Store>,
    config: Arc<EngineConfig>,
    log: EventLog,
    locks: DealLocks,
    seed: Option<u64>,
}

impl GateEngine {
    pub fn new(store: Arc<dyn Store>, config: Arc<EngineConfig>) -> Self {
        let log = EventLog::new(store.clone());
        Self {
            store,
            config,
            log,
            locks: DealLocks::default(),
            seed: None,
        }
    }

    /// Attach a job queue for follow-up work on gate events.
    pub fn with_job_queue(mut self, queue: Arc<dyn JobQueue>) -> Self {
        self.log = EventLog::new(self.store.clone()).with_queue(queue);
        self
    }

    /// Pin the estimator seed so G1 evaluations are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// G1 — deal approval: BLOCK unless the p80 estimate stays at or
    /// under the deal's exposure ceiling.
    pub fn evaluate_deal_approval(
        &self,
        deal_id: DealId,
    ) -> Result<GateOutcome, GateError> {
        let handle = self.locks.handle(deal_id);
        let _guard = locks::lock(&handle);

        let mut estimator = Estimator::new(self.store.clone(), self.config.clone());
        if let Some(seed) = self.seed {
            estimator = estimator.with_seed(seed);
        }
        let check = estimator.check_max_exposure(deal_id)?;

        let action = if check.passed {
            GateAction::Approve
        } else {
            GateAction::Block
        };
        let payload = json!({
            "p80": check.p80,
            "max_exposure": check.max_exposure_usd,
            "over_by": check.over_by,
            "drivers": check.drivers,
        });

        self.record(GateId::MaxExposure, deal_id, action, payload, None)
    }

    /// G2 — bid submission: BLOCK when the pending-bid spread exceeds
    /// the acceptable fraction of the median.
    pub fn evaluate_bid_submission(
        &self,
        deal_id: DealId,
        trade: Option<&str>,
    ) -> Result<GateOutcome, GateError> {
        let handle = self.locks.handle(deal_id);
        let _guard = locks::lock(&handle);

        let bids: Vec<_> = self
            .store
            .bids_for_deal(deal_id)?
            .into_iter()
            .filter(|b| b.status == BidStatus::Pending)
            .collect();
        let comparison = compare_bids(&self.config.units, &bids, trade, None)
            .ok_or(BidError::NoBids(deal_id))?;

        // `spread_pct` is a percent value; the configured threshold is a
        // fraction. Convert here, explicitly, rather than hiding the
        // scale in either constant.
        let spread_fraction = comparison.spread_pct / 100.0;
        let action = if spread_fraction > self.config.gates.max_bid_spread {
            GateAction::Block
        } else {
            GateAction::Award
        };

        let outlier_bids: Vec<String> = comparison
            .outliers
            .iter()
            .map(|o| o.bid_id.to_string())
            .collect();
        let payload = json!({
            "bid_spread": comparison.spread,
            "spread_pct": comparison.spread_pct,
            "lowest_bid": comparison.min,
            "highest_bid": comparison.max,
            "median_bid": comparison.median,
            "bid_count": comparison.totals.len(),
            "outlier_bids": outlier_bids,
        });

        self.record(GateId::BidSpread, deal_id, action, payload, None)
    }

    /// G3 — invoice/actuals update: tiered response to budget variance.
    /// Variance of exactly the tier-1 threshold is still OK; tiers
    /// require strictly greater variance.
    ///
    /// A tier-1 response freezes every non-critical trade on the ledger
    /// and records the old and new freeze lists in the event diff.
    pub fn evaluate_actuals_update(
        &self,
        deal_id: DealId,
    ) -> Result<GateOutcome, GateError> {
        let handle = self.locks.handle(deal_id);
        let _guard = locks::lock(&handle);

        let ledger = self
            .store
            .ledger_for_deal(deal_id)?
            .ok_or(GateError::LedgerNotFound(deal_id))?;

        let budgeted = ledger.budgeted_total();
        let actual = ledger.actuals.total;
        // Multiply before dividing so round-number variances land exactly
        // on their boundary values.
        let variance_pct = if budgeted > 0.0 {
            (actual - budgeted) * 100.0 / budgeted
        } else {
            0.0
        };

        let gates = &self.config.gates;
        let (action, tier) = if variance_pct > gates.variance_tier2_pct {
            (GateAction::EscalateTier2, 2)
        } else if variance_pct > gates.variance_tier1_pct {
            (GateAction::FreezeTier1, 1)
        } else {
            (GateAction::Ok, 0)
        };

        let mut before = None;
        let mut frozen_trades: Vec<String> = ledger.variance.frozen_trades.clone();
        if action == GateAction::FreezeTier1 {
            frozen_trades = ledger
                .trades()
                .into_iter()
                .filter(|t| !gates.is_critical_trade(t))
                .collect();
            self.store.set_frozen_trades(deal_id, &frozen_trades)?;
            before = Some(json!({
                "frozen_trades": ledger.variance.frozen_trades,
            }));
        }

        let payload = json!({
            "budget_variance": variance_pct,
            "actual": actual,
            "budgeted": budgeted,
            "tier": tier,
            "frozen_trades": frozen_trades,
        });

        self.record(GateId::BudgetVariance, deal_id, action, payload, before)
    }

    /// G4 — change-order proposal: approve unless the post-change p80
    /// breaches the exposure cap or ROI falls below target, and record
    /// the status transition it causes.
    pub fn evaluate_change_order(
        &self,
        change_order_id: ChangeOrderId,
    ) -> Result<GateOutcome, GateError> {
        let co = self
            .store
            .get_change_order(change_order_id)?
            .ok_or(GateError::ChangeOrderNotFound(change_order_id))?;

        let handle = self.locks.handle(co.deal_id);
        let _guard = locks::lock(&handle);

        let simulator = CoSimulator::new(self.store.clone(), self.config.clone());
        let evaluation =
            simulator.evaluate_co(co.deal_id, co.delta_usd, co.impact_days)?;

        let (action, status) = if evaluation.approved {
            (GateAction::ApproveCo, ChangeOrderStatus::Approved)
        } else {
            (GateAction::Deny, ChangeOrderStatus::Denied)
        };

        let decided_at = chrono::Utc::now();
        self.store
            .transition_change_order(change_order_id, status, decided_at)?;

        let simulation = &evaluation.simulation;
        let payload = json!({
            "change_order_impact": simulation.delta_usd,
            "original_budget": simulation.base_cost,
            "new_budget": simulation.base_cost + simulation.delta_usd,
            "impact_days": simulation.impact_days,
            "p80_after": simulation.after.p80,
            "roi_after": simulation.after.roi_pct,
            "exposure_violation": evaluation.exposure_violation,
            "roi_violation": evaluation.roi_violation,
            "message": evaluation.message,
        });
        let before = Some(json!({ "status": co.status, "decided_at": co.decided_at }));
        let after = json!({ "status": status, "decided_at": decided_at });

        self.record_transition(
            GateId::ChangeOrder,
            co.deal_id,
            action,
            payload,
            before,
            Some(after),
        )
    }

    fn record(
        &self,
        gate: GateId,
        deal_id: DealId,
        action: GateAction,
        payload: Value,
        before: Option<Value>,
    ) -> Result<GateOutcome, GateError> {
        self.record_transition(gate, deal_id, action, payload, before, None)
    }

    /// Write the gate's decision event. The payload rides both in the
    /// diff (persisted, read by panels) and in metadata (checksummed at
    /// write time).
    fn record_transition(
        &self,
        gate: GateId,
        deal_id: DealId,
        action: GateAction,
        payload: Value,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Result<GateOutcome, GateError> {
        let after = after.unwrap_or_else(|| payload.clone());

        let mut write = WriteEvent::new(gate.actor(), gate.artifact(), action.as_str())
            .deal(deal_id)
            .after(after)
            .metadata(payload.clone());
        write.before = before;

        let event_id = self.log.write_event(write).map_err(|e| {
            tracing::error!(
                gate = %gate,
                code = e.error_code(),
                error = %e,
                "failed to record gate decision"
            );
            e
        })?;

        tracing::info!(
            gate = %gate,
            deal = %deal_id,
            action = %action,
            event = %event_id,
            "gate decision"
        );

        Ok(GateOutcome {
            gate,
            action,
            payload,
            event_id,
        })
    }
}
