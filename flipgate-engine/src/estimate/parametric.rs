//! Parametric percentile band — closed-form z-factor inflation.
//!
//! Each line's combined uncertainty inflates its total by `1 + σ × z`
//! per percentile; the band is the per-percentile sum across lines.

use rustc_hash::FxHashMap;

use flipgate_core::config::EstimatorConfig;

use super::band::BandResult;
use super::types::CostedLine;

pub(crate) fn compute(lines: &[CostedLine], config: &EstimatorConfig) -> BandResult {
    if lines.is_empty() {
        return BandResult::zero();
    }

    let mut p50 = 0.0;
    let mut p80 = 0.0;
    let mut p95 = 0.0;
    let mut item_p80 = Vec::with_capacity(lines.len());
    let mut trade_bands: FxHashMap<String, (f64, f64, f64)> = FxHashMap::default();

    for line in lines {
        let sigma = line.combined_uncertainty;
        let line_p50 = line.total;
        let line_p80 = line.total * (1.0 + sigma * config.z_p80);
        let line_p95 = line.total * (1.0 + sigma * config.z_p95);

        p50 += line_p50;
        p80 += line_p80;
        p95 += line_p95;
        item_p80.push(line_p80);

        let entry = trade_bands.entry(line.trade.clone()).or_insert((0.0, 0.0, 0.0));
        entry.0 += line_p50;
        entry.1 += line_p80;
        entry.2 += line_p95;
    }

    BandResult {
        p50,
        p80,
        p95,
        item_p80,
        trade_bands,
    }
}
