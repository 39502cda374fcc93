//! Truth panel: the deal's risk position against policy.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use flipgate_core::config::EngineConfig;
use flipgate_core::errors::PanelError;
use flipgate_core::traits::Store;
use flipgate_core::types::DealId;

use crate::estimate::{EstimateRequest, Estimator};
use crate::gates::GateAction;

use super::types::{
    ContingencyStatus, EstimateSummary, GateState, RecommendedAction, TruthPanel,
};

pub(super) fn build(
    store: &Arc<dyn Store>,
    config: &Arc<EngineConfig>,
    deal_id: DealId,
    as_of: DateTime<Utc>,
) -> Result<TruthPanel, PanelError> {
    let deal = store
        .get_deal(deal_id)?
        .ok_or(PanelError::DealNotFound(deal_id))?;

    let policy = store.policy_for(&deal.region, &deal.grade)?;

    // Parametric on the read side: deterministic and cheap enough for a
    // request path, unlike a full sampling run.
    let estimator = Estimator::new(store.clone(), config.clone());
    let estimate = estimator.estimate(&EstimateRequest::parametric(deal_id))?;
    let summary = EstimateSummary {
        baseline: estimate.baseline,
        p50: estimate.p50,
        p80: estimate.p80,
        p95: estimate.p95,
        missing_cost_models: estimate.metadata.missing_cost_models.len(),
    };

    let headroom_pct = if deal.max_exposure_usd > 0.0 {
        (deal.max_exposure_usd - estimate.p80) / deal.max_exposure_usd * 100.0
    } else {
        0.0
    };

    // Contingency consumption: spend beyond the budgeted total eats the
    // policy-targeted pool. Absent a ledger or policy there is nothing
    // to measure against.
    let ledger = store.ledger_for_deal(deal_id)?;
    let contingency = match (&ledger, &policy) {
        (Some(ledger), Some(policy)) => {
            let pool = ledger.baseline.total * policy.contingency_target_pct;
            let consumed =
                (ledger.actuals.total - ledger.budgeted_total()).max(0.0);
            Some(ContingencyStatus {
                target_pct: policy.contingency_target_pct,
                pool_usd: pool,
                consumed_usd: consumed,
                consumed_pct: if pool > 0.0 {
                    consumed / pool * 100.0
                } else {
                    0.0
                },
            })
        }
        _ => None,
    };

    let gate_states = latest_gate_states(store, config, deal_id, as_of)?;

    let mut actions = Vec::new();
    if headroom_pct < config.panels.headroom_warn_pct {
        actions.push(RecommendedAction::NegotiateScopeOrPrice);
    }
    if gate_state_is(&gate_states, "bid", GateAction::Block) {
        actions.push(RecommendedAction::ReviewScopeMismatchBids);
    }
    if gate_state_is(&gate_states, "ledger", GateAction::EscalateTier2) {
        actions.push(RecommendedAction::RunCoSimulation);
    }

    Ok(TruthPanel {
        deal_id,
        policy,
        estimate: summary,
        headroom_pct,
        contingency,
        gate_states,
        actions,
    })
}

/// Most recent gate decision per artifact within the scan window.
fn latest_gate_states(
    store: &Arc<dyn Store>,
    config: &EngineConfig,
    deal_id: DealId,
    as_of: DateTime<Utc>,
) -> Result<Vec<GateState>, PanelError> {
    let events = super::gate_events_in_window(store, config, deal_id, as_of)?;

    // Events arrive newest first, so the first hit per artifact wins.
    let mut seen: FxHashMap<String, GateState> = FxHashMap::default();
    for event in events {
        let Some(action) = GateAction::parse(&event.action) else {
            continue;
        };
        seen.entry(event.artifact.clone()).or_insert(GateState {
            artifact: event.artifact,
            actor: event.actor,
            action,
            ts: event.ts,
        });
    }

    let mut states: Vec<GateState> = seen.into_values().collect();
    states.sort_by(|a, b| a.artifact.cmp(&b.artifact));
    Ok(states)
}

fn gate_state_is(states: &[GateState], artifact: &str, action: GateAction) -> bool {
    states
        .iter()
        .any(|s| s.artifact == artifact && s.action == action)
}
