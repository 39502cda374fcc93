//! Engine configuration: immutable reference tables and thresholds.
//!
//! Every table here is constructed once at startup (defaults, optionally
//! overridden from a TOML file) and passed to engine components by
//! reference. Nothing in this module is mutated after construction.

pub mod estimator_config;
pub mod gate_config;
pub mod panel_config;
pub mod risk_config;
pub mod uncertainty_config;
pub mod units_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use estimator_config::EstimatorConfig;
pub use gate_config::GateConfig;
pub use panel_config::PanelConfig;
pub use risk_config::RiskMultipliers;
pub use uncertainty_config::{TradeUncertainty, UncertaintyTable};
pub use units_config::{UnitAlias, UnitTable};

/// Top-level configuration for the guardrail & estimation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub units: UnitTable,
    pub uncertainty: UncertaintyTable,
    pub risk: RiskMultipliers,
    pub estimator: EstimatorConfig,
    pub gates: GateConfig,
    pub panels: PanelConfig,
}

impl EngineConfig {
    /// Parse configuration from a TOML string. Missing sections fall back
    /// to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_thresholds() {
        let config = EngineConfig::default();
        assert_eq!(config.gates.max_bid_spread, 0.15);
        assert_eq!(config.gates.variance_tier1_pct, 3.0);
        assert_eq!(config.gates.variance_tier2_pct, 7.0);
        assert!(config.estimator.min_runs >= 100);
    }

    #[test]
    fn toml_overrides_merge_over_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [gates]
            max_bid_spread = 0.20

            [estimator]
            default_runs = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.gates.max_bid_spread, 0.20);
        assert_eq!(config.estimator.default_runs, 500);
        // Untouched sections keep their defaults.
        assert_eq!(config.risk.before_p95, 1.18);
        assert!(config.units.lookup("sf").is_some());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.panels.planned_milestones, 6);
    }
}
