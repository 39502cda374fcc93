//! Motion panel: milestones, bottlenecks, and vendor reliability.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use flipgate_core::config::EngineConfig;
use flipgate_core::constants::{
    VENDOR_RELIABILITY_BASE, VENDOR_RELIABILITY_MAX,
    VENDOR_RELIABILITY_PER_BID, VENDOR_RELIABILITY_PER_INVOICE,
};
use flipgate_core::errors::PanelError;
use flipgate_core::traits::Store;
use flipgate_core::types::{DealId, VendorId};

use crate::gates::GateAction;

use super::types::{Bottleneck, MilestoneProgress, MotionPanel, VendorReliability};

const BOTTLENECK_LIMIT: usize = 5;

pub(super) fn build(
    store: &Arc<dyn Store>,
    config: &Arc<EngineConfig>,
    deal_id: DealId,
    as_of: DateTime<Utc>,
) -> Result<MotionPanel, PanelError> {
    store
        .get_deal(deal_id)?
        .ok_or(PanelError::DealNotFound(deal_id))?;

    let events = super::gate_events_in_window(store, config, deal_id, as_of)?;

    let planned = config.panels.planned_milestones;
    let passing = events
        .iter()
        .filter_map(|e| GateAction::parse(&e.action))
        .filter(GateAction::is_passing)
        .count();
    let completed = passing.min(planned);
    let milestones = MilestoneProgress {
        completed,
        planned,
        completion_pct: if planned > 0 {
            completed as f64 / planned as f64 * 100.0
        } else {
            0.0
        },
    };

    // Events are newest first; the freshest blocks surface.
    let bottlenecks: Vec<Bottleneck> = events
        .iter()
        .filter_map(|e| {
            let action = GateAction::parse(&e.action)?;
            action.is_blocking().then(|| Bottleneck {
                artifact: e.artifact.clone(),
                actor: e.actor.clone(),
                action,
                ts: e.ts,
            })
        })
        .take(BOTTLENECK_LIMIT)
        .collect();

    // Coarse activity-count heuristic, not a statistical reliability
    // score.
    let mut activity: FxHashMap<VendorId, (usize, usize)> = FxHashMap::default();
    for bid in store.bids_for_deal(deal_id)? {
        activity.entry(bid.vendor_id).or_default().1 += 1;
    }
    for invoice in store.invoices_for_deal(deal_id)? {
        activity.entry(invoice.vendor_id).or_default().0 += 1;
    }
    let mut vendor_reliability: Vec<VendorReliability> = activity
        .into_iter()
        .map(|(vendor_id, (invoice_count, bid_count))| VendorReliability {
            vendor_id,
            score: (VENDOR_RELIABILITY_BASE
                + invoice_count as f64 * VENDOR_RELIABILITY_PER_INVOICE
                + bid_count as f64 * VENDOR_RELIABILITY_PER_BID)
                .min(VENDOR_RELIABILITY_MAX),
            invoice_count,
            bid_count,
        })
        .collect();
    vendor_reliability.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.vendor_id.inner().cmp(&b.vendor_id.inner()))
    });

    Ok(MotionPanel {
        deal_id,
        milestones,
        bottlenecks,
        vendor_reliability,
    })
}
