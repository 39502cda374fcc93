//! Change-order financial simulation.
//!
//! Deliberately decoupled from the full estimator: a mid-project change
//! order is evaluated against committed/actual spend from the ledger,
//! not the original scope estimate, using fixed risk multipliers.
//! Cost increases are loaded with extra contingency and risk; savings
//! are taken at face value.

mod types;

use std::sync::Arc;

use flipgate_core::config::EngineConfig;
use flipgate_core::errors::SimulationError;
use flipgate_core::traits::Store;
use flipgate_core::types::{BudgetLedger, DealId, DealSpec};

pub use types::{CoEvaluation, CoSimulation, RiskSnapshot, SimulationDeltas};

/// ROI as a fraction, defensively zero when the denominator is not a
/// positive finite cost.
fn roi_pct(arv: f64, cost: f64) -> f64 {
    if cost > 0.0 && cost.is_finite() {
        (arv - cost) / cost
    } else {
        0.0
    }
}

/// The change-order simulator.
pub struct CoSimulator {
    store: Arc<dyn Store>,
    config: Arc<EngineConfig>,
}

impl CoSimulator {
    pub fn new(store: Arc<dyn Store>, config: Arc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// Project the effect of a signed cost/schedule delta on a deal's
    /// risk-adjusted cost and ROI.
    pub fn simulate_co(
        &self,
        deal_id: DealId,
        delta_usd: f64,
        impact_days: i32,
    ) -> Result<CoSimulation, SimulationError> {
        let (deal, ledger) = self.fetch(deal_id)?;
        Ok(self.project(&deal, &ledger, delta_usd, impact_days))
    }

    /// Run the simulation and apply the exposure and ROI checks — the
    /// change-order gate's decision function.
    pub fn evaluate_co(
        &self,
        deal_id: DealId,
        delta_usd: f64,
        impact_days: i32,
    ) -> Result<CoEvaluation, SimulationError> {
        let (deal, ledger) = self.fetch(deal_id)?;
        let simulation = self.project(&deal, &ledger, delta_usd, impact_days);

        let exposure_violation = simulation.after.p80 > deal.max_exposure_usd;
        let roi_violation = simulation.after.roi_pct < deal.target_roi_pct;
        let approved = !exposure_violation && !roi_violation;

        let message = if approved {
            format!(
                "change order within guardrails: p80 {:.0} ≤ cap {:.0}, roi {:.3} ≥ target {:.3}",
                simulation.after.p80, deal.max_exposure_usd,
                simulation.after.roi_pct, deal.target_roi_pct,
            )
        } else if exposure_violation {
            // Exposure first, even when both checks fail.
            format!(
                "p80 exposure {:.0} exceeds cap {:.0}",
                simulation.after.p80, deal.max_exposure_usd,
            )
        } else {
            format!(
                "roi {:.3} falls below target {:.3}",
                simulation.after.roi_pct, deal.target_roi_pct,
            )
        };

        Ok(CoEvaluation {
            simulation,
            exposure_violation,
            roi_violation,
            approved,
            message,
        })
    }

    fn fetch(
        &self,
        deal_id: DealId,
    ) -> Result<(DealSpec, BudgetLedger), SimulationError> {
        let deal = self
            .store
            .get_deal(deal_id)?
            .ok_or(SimulationError::DealNotFound(deal_id))?;
        let ledger = self
            .store
            .ledger_for_deal(deal_id)?
            .ok_or(SimulationError::LedgerNotFound(deal_id))?;
        Ok((deal, ledger))
    }

    fn project(
        &self,
        deal: &DealSpec,
        ledger: &BudgetLedger,
        delta_usd: f64,
        impact_days: i32,
    ) -> CoSimulation {
        let risk = &self.config.risk;
        let base_cost = ledger.budgeted_total() + ledger.actuals.total;

        let before = RiskSnapshot {
            p50: base_cost * risk.before_p50,
            p80: base_cost * risk.before_p80,
            p95: base_cost * risk.before_p95,
            roi_pct: roi_pct(deal.arv, base_cost),
        };

        let contingency_mult = risk.contingency_for(delta_usd);
        let risk_mult = risk.risk_for(delta_usd);

        let cost_after = base_cost + delta_usd;
        let after = RiskSnapshot {
            p50: cost_after,
            p80: before.p80 + delta_usd * contingency_mult,
            p95: before.p95 + delta_usd * risk_mult,
            roi_pct: roi_pct(deal.arv, cost_after),
        };

        CoSimulation {
            deal_id: deal.id,
            base_cost,
            delta_usd,
            impact_days,
            deltas: SimulationDeltas {
                p80: after.p80 - before.p80,
                cost: delta_usd,
                roi_pct: after.roi_pct - before.roi_pct,
                impact_days,
            },
            before,
            after,
        }
    }
}
