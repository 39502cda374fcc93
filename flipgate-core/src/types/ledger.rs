//! Budget ledgers — baseline, committed, and actual spend per deal.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::identifiers::DealId;

/// A spend bucket: a total plus its per-trade breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetBucket {
    pub total: f64,
    #[serde(default)]
    pub by_trade: FxHashMap<String, f64>,
}

/// Variance state, including which trades are frozen by a tier-1
/// guardrail response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VarianceState {
    /// Variance of actuals against the budgeted total, in percent.
    pub pct: f64,
    #[serde(default)]
    pub frozen_trades: Vec<String>,
}

/// One ledger per deal. Created at deal approval; updated by invoice,
/// bid, and change-order processing outside this engine. The simulator
/// and panels read it; the variance gate writes `variance.frozen_trades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLedger {
    pub deal_id: DealId,
    pub baseline: BudgetBucket,
    pub committed: BudgetBucket,
    pub actuals: BudgetBucket,
    pub variance: VarianceState,
    pub updated_at: DateTime<Utc>,
}

impl BudgetLedger {
    /// The budgeted total a variance or change order is measured against:
    /// committed spend once any exists, otherwise the baseline.
    pub fn budgeted_total(&self) -> f64 {
        if self.committed.total > 0.0 {
            self.committed.total
        } else {
            self.baseline.total
        }
    }

    /// Union of trades appearing in any bucket, sorted.
    pub fn trades(&self) -> Vec<String> {
        let mut trades: Vec<String> = self
            .baseline
            .by_trade
            .keys()
            .chain(self.committed.by_trade.keys())
            .chain(self.actuals.by_trade.keys())
            .cloned()
            .collect();
        trades.sort();
        trades.dedup();
        trades
    }
}
