//! Per-trade cost uncertainty table for the estimator.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LABOR_UNCERTAINTY, DEFAULT_MATERIAL_UNCERTAINTY};

/// Material and labor uncertainty fractions for one trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TradeUncertainty {
    pub material_pct: f64,
    pub labor_pct: f64,
}

/// Immutable per-trade uncertainty table with a default fallback,
/// constructed once at startup. Keys are lowercased trade names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyTable {
    trades: FxHashMap<String, TradeUncertainty>,
    pub fallback: TradeUncertainty,
}

impl UncertaintyTable {
    /// Uncertainty fractions for a trade, falling back to the default.
    pub fn for_trade(&self, trade: &str) -> TradeUncertainty {
        self.trades
            .get(&trade.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn insert(&mut self, trade: &str, uncertainty: TradeUncertainty) {
        self.trades
            .insert(trade.to_ascii_lowercase(), uncertainty);
    }
}

impl Default for UncertaintyTable {
    fn default() -> Self {
        let mut trades = FxHashMap::default();
        let mut put = |trade: &str, material_pct: f64, labor_pct: f64| {
            trades.insert(
                trade.to_string(),
                TradeUncertainty {
                    material_pct,
                    labor_pct,
                },
            );
        };

        // Commodity-priced trades swing on materials; labor is steadier.
        put("roofing", 0.15, 0.10);
        put("framing", 0.25, 0.15);
        put("drywall", 0.10, 0.10);
        put("painting", 0.08, 0.12);
        put("flooring", 0.15, 0.10);
        put("electrical", 0.12, 0.20);
        put("plumbing", 0.15, 0.20);
        put("hvac", 0.18, 0.15);
        put("landscaping", 0.20, 0.15);
        put("demolition", 0.10, 0.25);
        put("foundation", 0.30, 0.25);
        put("windows", 0.12, 0.10);

        Self {
            trades,
            fallback: TradeUncertainty {
                material_pct: DEFAULT_MATERIAL_UNCERTAINTY,
                labor_pct: DEFAULT_LABOR_UNCERTAINTY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = UncertaintyTable::default();
        let roofing = table.for_trade("Roofing");
        assert_eq!(roofing.material_pct, 0.15);
    }

    #[test]
    fn unknown_trade_uses_fallback() {
        let table = UncertaintyTable::default();
        let unknown = table.for_trade("basket-weaving");
        assert_eq!(unknown.material_pct, DEFAULT_MATERIAL_UNCERTAINTY);
        assert_eq!(unknown.labor_pct, DEFAULT_LABOR_UNCERTAINTY);
    }
}
