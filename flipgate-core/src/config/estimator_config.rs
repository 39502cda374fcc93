//! Estimator settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MONTE_CARLO_RUNS, ESTIMATE_DRIVER_COUNT, MAX_MONTE_CARLO_RUNS,
    MIN_MONTE_CARLO_RUNS, Z_P80, Z_P95,
};

/// Settings for the probabilistic cost estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Monte Carlo run count when the caller does not specify one.
    pub default_runs: usize,
    /// Floor on requested run counts.
    pub min_runs: usize,
    /// Ceiling on requested run counts, so the CPU-bound sampling loop
    /// stays bounded on a request path.
    pub max_runs: usize,
    /// Parametric z-factor for the 80th percentile.
    pub z_p80: f64,
    /// Parametric z-factor for the 95th percentile.
    pub z_p95: f64,
    /// How many cost drivers an estimate reports.
    pub driver_count: usize,
}

impl EstimatorConfig {
    /// Clamp a requested run count into the configured bounds.
    pub fn clamp_runs(&self, requested: usize) -> usize {
        requested.clamp(self.min_runs, self.max_runs)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_runs: DEFAULT_MONTE_CARLO_RUNS,
            min_runs: MIN_MONTE_CARLO_RUNS,
            max_runs: MAX_MONTE_CARLO_RUNS,
            z_p80: Z_P80,
            z_p95: Z_P95,
            driver_count: ESTIMATE_DRIVER_COUNT,
        }
    }
}
