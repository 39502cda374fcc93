//! Cross-vendor bid statistics: spread and IQR outlier detection.

mod types;

use rustc_hash::FxHashMap;

use flipgate_core::config::UnitTable;
use flipgate_core::types::Bid;

use crate::normalize::normalize_quantity;

pub use types::{BidComparison, BidOutlier, ComparableTotal, NormalizedBid};

/// Normalize a bid's item quantities and aggregate its dollar totals.
pub fn normalize_bid(units: &UnitTable, bid: &Bid) -> NormalizedBid {
    normalize_bid_filtered(units, bid, None)
}

fn normalize_bid_filtered(
    units: &UnitTable,
    bid: &Bid,
    task: Option<&str>,
) -> NormalizedBid {
    let mut total_by_trade: FxHashMap<String, f64> = FxHashMap::default();
    let mut grand_total = 0.0;
    let mut warnings = Vec::new();

    for item in &bid.items {
        if let Some(task) = task {
            if !item.task.eq_ignore_ascii_case(task) {
                continue;
            }
        }

        let qty = normalize_quantity(units, item.quantity.value, &item.quantity.unit);
        if !qty.recognized {
            warnings.push(format!(
                "bid {}: unknown unit '{}' on {}/{}, defaulted to ea",
                bid.id, item.quantity.unit, item.trade, item.task
            ));
        }

        // Dollar totals are aggregated as quoted; the quantity factor
        // must not rescale currency.
        *total_by_trade.entry(item.trade.to_ascii_lowercase()).or_insert(0.0) +=
            item.total_usd;
        grand_total += item.total_usd;
    }

    NormalizedBid {
        bid_id: bid.id,
        vendor_id: bid.vendor_id,
        total_by_trade,
        grand_total,
        warnings,
    }
}

/// Compare bids on the same scope: min/max/mean/median, spread, and IQR
/// outliers over each bid's comparable total (grand total, or the
/// filtered trade's total when `trade` is given).
///
/// Returns `None` when no bid produces a comparable total.
pub fn compare_bids(
    units: &UnitTable,
    bids: &[Bid],
    trade: Option<&str>,
    task: Option<&str>,
) -> Option<BidComparison> {
    let totals: Vec<ComparableTotal> = bids
        .iter()
        .map(|bid| {
            let normalized = normalize_bid_filtered(units, bid, task);
            let total = match trade {
                Some(trade) => normalized
                    .total_by_trade
                    .get(&trade.to_ascii_lowercase())
                    .copied()
                    .unwrap_or(0.0),
                None => normalized.grand_total,
            };
            ComparableTotal {
                bid_id: bid.id,
                vendor_id: bid.vendor_id,
                total,
            }
        })
        .collect();

    if totals.is_empty() {
        return None;
    }

    let mut sorted: Vec<f64> = totals.iter().map(|t| t.total).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let min = sorted[0];
    let max = sorted[n - 1];
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = sorted[n / 2];
    let spread = max - min;
    // Percent, not a fraction. See `BidComparison` docs.
    let spread_pct = if median > 0.0 {
        (spread / median) * 100.0
    } else {
        0.0
    };

    let q1 = sorted[((n as f64) * 0.25).floor() as usize];
    let q3 = sorted[(((n as f64) * 0.75).floor() as usize).min(n - 1)];
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let outliers: Vec<BidOutlier> = totals
        .iter()
        .filter(|t| t.total < low_fence || t.total > high_fence)
        .map(|t| BidOutlier {
            bid_id: t.bid_id,
            vendor_id: t.vendor_id,
            total: t.total,
            low_fence,
            high_fence,
        })
        .collect();

    Some(BidComparison {
        totals,
        min,
        max,
        mean,
        median,
        spread,
        spread_pct,
        outliers,
    })
}
