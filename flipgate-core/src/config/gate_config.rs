//! Guardrail gate thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CRITICAL_TRADES, DEFAULT_MAX_BID_SPREAD, VARIANCE_TIER1_PCT,
    VARIANCE_TIER2_PCT,
};

/// Thresholds for the four guardrail gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Maximum acceptable bid spread as a FRACTION of the median bid.
    /// `BidComparison::spread_pct` is a percent value; gate code converts
    /// explicitly rather than baking the scale into either side.
    pub max_bid_spread: f64,
    /// Budget variance percent above which non-critical trades freeze.
    pub variance_tier1_pct: f64,
    /// Budget variance percent above which tier-2 escalation fires.
    pub variance_tier2_pct: f64,
    /// Trades exempt from a tier-1 freeze (lowercased for matching).
    pub critical_trades: Vec<String>,
}

impl GateConfig {
    /// Whether a trade survives a tier-1 freeze.
    pub fn is_critical_trade(&self, trade: &str) -> bool {
        let lowered = trade.to_ascii_lowercase();
        self.critical_trades.iter().any(|t| *t == lowered)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_bid_spread: DEFAULT_MAX_BID_SPREAD,
            variance_tier1_pct: VARIANCE_TIER1_PCT,
            variance_tier2_pct: VARIANCE_TIER2_PCT,
            critical_trades: DEFAULT_CRITICAL_TRADES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}
