//! Probabilistic cost estimation over a deal's scope of work.

mod band;
mod monte_carlo;
mod parametric;
mod types;

use std::sync::Arc;

use rand::Rng;
use rustc_hash::FxHashMap;

use flipgate_core::config::EngineConfig;
use flipgate_core::errors::EstimateError;
use flipgate_core::traits::Store;
use flipgate_core::types::{DealId, ScopeNode};

use crate::normalize::normalize_quantity;

use band::BandResult;
pub use types::{
    CostDriver, Estimate, EstimateMetadata, EstimateRequest, ExposureCheck,
    MissingCostModel, TradeBreakdown, UncertaintyMode,
};
use types::CostedLine;

/// The probabilistic cost estimator.
///
/// Stateless between calls: every estimate re-reads the deal, its scope,
/// and the matching reference prices at call time.
pub struct Estimator {
    store: Arc<dyn Store>,
    config: Arc<EngineConfig>,
    seed: Option<u64>,
}

impl Estimator {
    pub fn new(store: Arc<dyn Store>, config: Arc<EngineConfig>) -> Self {
        Self {
            store,
            config,
            seed: None,
        }
    }

    /// Pin the Monte Carlo base seed, making estimates reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Produce a baseline and p50/p80/p95 band for a deal's scope.
    ///
    /// Scope lines without a matching reference-price row are skipped
    /// and listed in `metadata.missing_cost_models`; a non-empty list
    /// means the estimate is a lower bound, and callers must treat it
    /// that way.
    pub fn estimate(&self, req: &EstimateRequest) -> Result<Estimate, EstimateError> {
        let deal = self
            .store
            .get_deal(req.deal_id)?
            .ok_or(EstimateError::DealNotFound(req.deal_id))?;
        let region = req.region.clone().unwrap_or_else(|| deal.region.clone());
        let grade = req.grade.clone().unwrap_or_else(|| deal.grade.clone());

        let nodes = self.store.scope_for_deal(req.deal_id)?;
        let (lines, missing_cost_models, unit_warnings) =
            self.cost_lines(&nodes, &region, &grade)?;

        let baseline: f64 = lines.iter().map(|l| l.total).sum();

        let (band, mode, runs, seed) = match req.mode {
            UncertaintyMode::Parametric => (
                parametric::compute(&lines, &self.config.estimator),
                "parametric",
                None,
                None,
            ),
            UncertaintyMode::MonteCarlo { runs } => {
                let runs = self.config.estimator.clamp_runs(runs);
                let seed = self
                    .seed
                    .unwrap_or_else(|| rand::thread_rng().gen());
                (
                    monte_carlo::compute(&lines, runs, seed),
                    "monte-carlo",
                    Some(runs),
                    Some(seed),
                )
            }
        };

        if !missing_cost_models.is_empty() {
            tracing::warn!(
                deal = %req.deal_id,
                skipped = missing_cost_models.len(),
                "estimate is a lower bound: scope lines without cost models"
            );
        }

        let drivers = self.rank_drivers(&lines, &band, baseline);
        let by_trade = trade_breakdown(&lines, &band);

        Ok(Estimate {
            deal_id: req.deal_id,
            baseline,
            p50: band.p50,
            p80: band.p80,
            p95: band.p95,
            by_trade,
            drivers,
            metadata: EstimateMetadata {
                mode: mode.to_string(),
                runs,
                seed,
                region,
                grade,
                missing_cost_models,
                unit_warnings,
            },
        })
    }

    /// The deal-approval decision: re-run the estimate and pass iff p80
    /// stays at or under the deal's hard cost ceiling. On failure the
    /// top uncertainty drivers ride along for the gate payload.
    pub fn check_max_exposure(
        &self,
        deal_id: DealId,
    ) -> Result<ExposureCheck, EstimateError> {
        let deal = self
            .store
            .get_deal(deal_id)?
            .ok_or(EstimateError::DealNotFound(deal_id))?;
        let estimate = self.estimate(&EstimateRequest::new(deal_id))?;

        // NaN compares false, so a degenerate band blocks, never passes.
        let passed = estimate.p80 <= deal.max_exposure_usd;
        let over_by = (estimate.p80 - deal.max_exposure_usd).max(0.0);
        let drivers = if passed {
            Vec::new()
        } else {
            estimate.drivers.clone()
        };

        Ok(ExposureCheck {
            deal_id,
            passed,
            p80: estimate.p80,
            max_exposure_usd: deal.max_exposure_usd,
            over_by,
            drivers,
        })
    }

    /// Cost each scope node against its reference-price row.
    fn cost_lines(
        &self,
        nodes: &[ScopeNode],
        region: &str,
        grade: &str,
    ) -> Result<(Vec<CostedLine>, Vec<MissingCostModel>, Vec<String>), EstimateError>
    {
        let mut lines = Vec::with_capacity(nodes.len());
        let mut missing = Vec::new();
        let mut warnings = Vec::new();

        for node in nodes {
            let qty = normalize_quantity(
                &self.config.units,
                node.quantity.value,
                &node.quantity.unit,
            );
            if !qty.recognized {
                warnings.push(format!(
                    "scope node {}: unknown unit '{}', defaulted to ea",
                    node.id, node.quantity.unit
                ));
            }

            let model = self.store.find_cost_model(
                region,
                grade,
                &node.trade,
                &node.task,
                qty.unit,
            )?;
            let Some(model) = model else {
                tracing::warn!(
                    node = %node.id,
                    trade = %node.trade,
                    task = %node.task,
                    unit = %qty.unit,
                    "no cost model row, skipping scope line"
                );
                missing.push(MissingCostModel {
                    node_id: node.id,
                    trade: node.trade.clone(),
                    task: node.task.clone(),
                    unit: node.quantity.unit.clone(),
                    canonical_unit: qty.unit,
                });
                continue;
            };

            let material = model.material_per_unit * qty.value;
            let labor = model.labor_per_unit * qty.value;
            let subtotal = material + labor;
            let contingency = subtotal * model.contingency_pct;
            let risk_premium = subtotal * model.risk_premium_pct;
            let total = subtotal + contingency + risk_premium;

            let uncertainty = self.config.uncertainty.for_trade(&node.trade);
            let combined = if subtotal > 0.0 {
                (material * uncertainty.material_pct + labor * uncertainty.labor_pct)
                    / subtotal
            } else {
                0.0
            };

            lines.push(CostedLine {
                node_id: node.id,
                trade: node.trade.clone(),
                task: node.task.clone(),
                material,
                labor,
                contingency,
                risk_premium,
                total,
                material_uncertainty: uncertainty.material_pct,
                labor_uncertainty: uncertainty.labor_pct,
                combined_uncertainty: combined,
            });
        }

        Ok((lines, missing, warnings))
    }

    /// Top items by contribution to the p80 uncertainty gap.
    fn rank_drivers(
        &self,
        lines: &[CostedLine],
        band: &BandResult,
        baseline: f64,
    ) -> Vec<CostDriver> {
        let gap = band.p80 - baseline;
        if !(gap > 0.0) || !gap.is_finite() {
            return Vec::new();
        }

        let mut drivers: Vec<CostDriver> = lines
            .iter()
            .zip(&band.item_p80)
            .map(|(line, item_p80)| CostDriver {
                node_id: line.node_id,
                trade: line.trade.clone(),
                task: line.task.clone(),
                uncertainty_share: (item_p80 - line.total) / gap,
                baseline_share: if baseline > 0.0 {
                    line.total / baseline
                } else {
                    0.0
                },
            })
            .collect();
        drivers.sort_by(|a, b| b.uncertainty_share.total_cmp(&a.uncertainty_share));
        drivers.truncate(self.config.estimator.driver_count);
        drivers
    }
}

/// Fold lines and the per-trade bands into a sorted breakdown.
fn trade_breakdown(lines: &[CostedLine], band: &BandResult) -> Vec<TradeBreakdown> {
    let mut baselines: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for line in lines {
        let entry = baselines.entry(line.trade.as_str()).or_insert((0.0, 0));
        entry.0 += line.total;
        entry.1 += 1;
    }

    let mut breakdown: Vec<TradeBreakdown> = baselines
        .into_iter()
        .map(|(trade, (baseline, line_count))| {
            let (p50, p80, p95) = band
                .trade_bands
                .get(trade)
                .copied()
                .unwrap_or((baseline, baseline, baseline));
            TradeBreakdown {
                trade: trade.to_string(),
                baseline,
                p50,
                p80,
                p95,
                line_count,
            }
        })
        .collect();
    breakdown.sort_by(|a, b| a.trade.cmp(&b.trade));
    breakdown
}
