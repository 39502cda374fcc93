//! Monte Carlo percentile band — seedable uniform sampling.
//!
//! Per run, material and labor get independent multipliers
//! `1 + U(-1,1) × uncertainty`. The uniform draw is a deliberate
//! approximation of a normal distribution; switching to a true Gaussian
//! sampler would change percentile outputs and is out of contract.
//! Contingency and risk premium are held at their baseline values, not
//! resampled.
//!
//! Runs are sampled in parallel. Each run derives its own `StdRng` from
//! the base seed and the run index, so results are reproducible
//! regardless of how rayon schedules the work.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::band::{quantile, BandResult};
use super::types::CostedLine;

pub(crate) fn compute(lines: &[CostedLine], runs: usize, seed: u64) -> BandResult {
    if lines.is_empty() || runs == 0 {
        return BandResult::zero();
    }

    // One sampled total per line per run, in input order.
    let samples: Vec<Vec<f64>> = (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(run as u64));
            lines
                .iter()
                .map(|line| {
                    let material_mult =
                        1.0 + rng.gen_range(-1.0..1.0) * line.material_uncertainty;
                    let labor_mult =
                        1.0 + rng.gen_range(-1.0..1.0) * line.labor_uncertainty;
                    line.material * material_mult
                        + line.labor * labor_mult
                        + line.contingency
                        + line.risk_premium
                })
                .collect()
        })
        .collect();

    let mut run_totals: Vec<f64> = samples
        .iter()
        .map(|items| items.iter().sum())
        .collect();
    run_totals.sort_by(f64::total_cmp);

    // Per-item p80 from each item's own sample column.
    let mut item_p80 = Vec::with_capacity(lines.len());
    for item in 0..lines.len() {
        let mut column: Vec<f64> = samples.iter().map(|run| run[item]).collect();
        column.sort_by(f64::total_cmp);
        item_p80.push(quantile(&column, 0.80));
    }

    // Per-trade bands from per-run trade sums.
    let mut trade_runs: FxHashMap<&str, Vec<f64>> = FxHashMap::default();
    for (item, line) in lines.iter().enumerate() {
        let sums = trade_runs
            .entry(line.trade.as_str())
            .or_insert_with(|| vec![0.0; runs]);
        for (run, items) in samples.iter().enumerate() {
            sums[run] += items[item];
        }
    }
    let mut trade_bands: FxHashMap<String, (f64, f64, f64)> = FxHashMap::default();
    for (trade, mut sums) in trade_runs {
        sums.sort_by(f64::total_cmp);
        trade_bands.insert(
            trade.to_string(),
            (
                quantile(&sums, 0.50),
                quantile(&sums, 0.80),
                quantile(&sums, 0.95),
            ),
        );
    }

    BandResult {
        p50: quantile(&run_totals, 0.50),
        p80: quantile(&run_totals, 0.80),
        p95: quantile(&run_totals, 0.95),
        item_p80,
        trade_bands,
    }
}

#[cfg(test)]
mod tests {
    use flipgate_core::types::ScopeNodeId;

    use super::*;

    fn line(trade: &str, material: f64, labor: f64, sigma: f64) -> CostedLine {
        let subtotal = material + labor;
        CostedLine {
            node_id: ScopeNodeId::new(),
            trade: trade.to_string(),
            task: "task".to_string(),
            material,
            labor,
            contingency: subtotal * 0.10,
            risk_premium: subtotal * 0.05,
            total: subtotal * 1.15,
            material_uncertainty: sigma,
            labor_uncertainty: sigma,
            combined_uncertainty: sigma,
        }
    }

    #[test]
    fn percentiles_are_monotone() {
        let lines = vec![
            line("roofing", 6_000.0, 4_000.0, 0.15),
            line("drywall", 2_000.0, 3_000.0, 0.10),
        ];
        let band = compute(&lines, 500, 42);
        assert!(band.p50 <= band.p80);
        assert!(band.p80 <= band.p95);
    }

    #[test]
    fn same_seed_reproduces_the_band() {
        let lines = vec![line("roofing", 6_000.0, 4_000.0, 0.15)];
        let a = compute(&lines, 250, 7);
        let b = compute(&lines, 250, 7);
        assert_eq!(a.p50, b.p50);
        assert_eq!(a.p80, b.p80);
        assert_eq!(a.p95, b.p95);
    }

    #[test]
    fn different_seeds_differ() {
        let lines = vec![line("roofing", 6_000.0, 4_000.0, 0.15)];
        let a = compute(&lines, 250, 7);
        let b = compute(&lines, 250, 8);
        assert_ne!(a.p80, b.p80);
    }

    #[test]
    fn zero_uncertainty_pins_every_percentile_to_baseline() {
        let lines = vec![line("painting", 1_000.0, 1_000.0, 0.0)];
        let band = compute(&lines, 200, 1);
        let expected = 2_000.0 * 1.15;
        assert!((band.p50 - expected).abs() < 1e-9);
        assert!((band.p95 - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_lines_yield_zero_band() {
        let band = compute(&[], 100, 1);
        assert_eq!(band.p50, 0.0);
        assert_eq!(band.p95, 0.0);
        assert!(band.item_p80.is_empty());
    }
}
