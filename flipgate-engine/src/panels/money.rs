//! Money panel: per-trade spend, change-order/invoice flow, and burn.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use flipgate_core::errors::PanelError;
use flipgate_core::traits::Store;
use flipgate_core::types::{ChangeOrderStatus, DealId, InvoiceStatus};

use super::types::{
    BurnSummary, ChangeOrderSummary, InvoiceSummary, MoneyPanel, TradeSpendRow,
};

const SECONDS_PER_DAY: f64 = 86_400.0;

pub(super) fn build(
    store: &Arc<dyn Store>,
    deal_id: DealId,
    as_of: DateTime<Utc>,
) -> Result<MoneyPanel, PanelError> {
    let deal = store
        .get_deal(deal_id)?
        .ok_or(PanelError::DealNotFound(deal_id))?;
    let ledger = store
        .ledger_for_deal(deal_id)?
        .ok_or(PanelError::LedgerNotFound(deal_id))?;

    let by_trade: Vec<TradeSpendRow> = ledger
        .trades()
        .into_iter()
        .map(|trade| {
            let get =
                |bucket: &flipgate_core::types::BudgetBucket| -> f64 {
                    bucket.by_trade.get(&trade).copied().unwrap_or(0.0)
                };
            TradeSpendRow {
                baseline: get(&ledger.baseline),
                committed: get(&ledger.committed),
                actual: get(&ledger.actuals),
                frozen: ledger.variance.frozen_trades.contains(&trade),
                trade,
            }
        })
        .collect();

    let change_orders = store.change_orders_for_deal(deal_id)?;
    let approved: Vec<_> = change_orders
        .iter()
        .filter(|co| co.status == ChangeOrderStatus::Approved)
        .collect();
    let co_latencies: Vec<f64> = change_orders
        .iter()
        .filter_map(|co| {
            co.decided_at.map(|decided| {
                (decided - co.created_at).num_seconds() as f64 / SECONDS_PER_DAY
            })
        })
        .collect();
    let change_orders = ChangeOrderSummary {
        count: change_orders.len(),
        approved_count: approved.len(),
        net_impact_usd: approved.iter().map(|co| co.delta_usd).sum(),
        avg_approval_latency_days: mean(&co_latencies),
    };

    let invoices = store.invoices_for_deal(deal_id)?;
    let invoice_latencies: Vec<f64> = invoices
        .iter()
        .filter_map(|inv| {
            inv.approved_at.map(|approved| {
                (approved - inv.submitted_at).num_seconds() as f64 / SECONDS_PER_DAY
            })
        })
        .collect();
    let invoices = InvoiceSummary {
        count: invoices.len(),
        approved_count: invoices
            .iter()
            .filter(|i| {
                matches!(i.status, InvoiceStatus::Approved | InvoiceStatus::Paid)
            })
            .count(),
        avg_approval_latency_days: mean(&invoice_latencies),
    };

    let held_from = deal.purchased_at.unwrap_or(deal.created_at);
    let days_held = (as_of - held_from).num_days().max(0);
    let burn = BurnSummary {
        daily_burn_usd: deal.daily_burn_usd,
        days_held,
        total_burn_usd: deal.daily_burn_usd * days_held as f64,
    };

    Ok(MoneyPanel {
        deal_id,
        by_trade,
        change_orders,
        invoices,
        burn,
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
