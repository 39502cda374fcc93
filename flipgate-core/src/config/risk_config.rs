//! Risk multipliers for the change-order simulator.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BEFORE_P50_MULTIPLIER, BEFORE_P80_MULTIPLIER, BEFORE_P95_MULTIPLIER,
    INCREASE_CONTINGENCY_MULTIPLIER, INCREASE_RISK_MULTIPLIER,
};

/// Fixed multipliers the simulator applies to committed/actual spend.
///
/// Deliberately decoupled from the full estimator: a change order is
/// evaluated against money already committed or spent, not against the
/// original scope estimate. Cost increases carry extra contingency and
/// risk loading; savings are taken at face value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskMultipliers {
    pub before_p50: f64,
    pub before_p80: f64,
    pub before_p95: f64,
    pub increase_contingency: f64,
    pub increase_risk: f64,
}

impl RiskMultipliers {
    /// Contingency multiplier for a signed cost delta.
    pub fn contingency_for(&self, delta_usd: f64) -> f64 {
        if delta_usd > 0.0 {
            self.increase_contingency
        } else {
            1.0
        }
    }

    /// Risk multiplier for a signed cost delta.
    pub fn risk_for(&self, delta_usd: f64) -> f64 {
        if delta_usd > 0.0 {
            self.increase_risk
        } else {
            1.0
        }
    }
}

impl Default for RiskMultipliers {
    fn default() -> Self {
        Self {
            before_p50: BEFORE_P50_MULTIPLIER,
            before_p80: BEFORE_P80_MULTIPLIER,
            before_p95: BEFORE_P95_MULTIPLIER,
            increase_contingency: INCREASE_CONTINGENCY_MULTIPLIER,
            increase_risk: INCREASE_RISK_MULTIPLIER,
        }
    }
}
