//! Estimator behavior: bands, drivers, missing models, exposure check.

mod common;

use flipgate_core::types::CanonicalUnit;
use flipgate_engine::estimate::{EstimateRequest, Estimator, UncertaintyMode};

use common::*;

#[test]
fn roofing_parametric_band_matches_hand_math() {
    let store = store();
    let config = config_roofing_15pct();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let estimator = Estimator::new(store, config);
    let estimate = estimator
        .estimate(&EstimateRequest::parametric(deal.id))
        .unwrap();

    // 2000 sqft × (3 + 2) × 1.15
    assert!((estimate.baseline - 11_500.0).abs() < 1e-9);
    assert_eq!(estimate.p50, estimate.baseline);
    // 15% combined uncertainty at z=0.84
    assert!((estimate.p80 - 12_949.0).abs() < 0.5);
    // and z=1.65
    assert!((estimate.p95 - 14_346.25).abs() < 0.5);

    assert_eq!(estimate.by_trade.len(), 1);
    assert_eq!(estimate.by_trade[0].trade, "roofing");
    assert_eq!(estimate.by_trade[0].line_count, 1);
    assert!(estimate.metadata.missing_cost_models.is_empty());
    assert!(estimate.metadata.unit_warnings.is_empty());
}

#[test]
fn check_max_exposure_passes_well_under_the_cap() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let estimator = Estimator::new(store, config_roofing_15pct()).with_seed(11);
    let check = estimator.check_max_exposure(deal.id).unwrap();

    assert!(check.passed);
    assert_eq!(check.max_exposure_usd, 200_000.0);
    assert_eq!(check.over_by, 0.0);
    assert!(check.drivers.is_empty());
}

#[test]
fn check_max_exposure_blocks_and_names_drivers() {
    let store = store();
    let deal = seed_deal(&store, 10_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let estimator = Estimator::new(store, config_roofing_15pct()).with_seed(11);
    let check = estimator.check_max_exposure(deal.id).unwrap();

    assert!(!check.passed);
    assert!(check.over_by > 0.0);
    assert!(!check.drivers.is_empty());
    assert_eq!(check.drivers[0].trade, "roofing");
}

#[test]
fn empty_scope_estimates_to_zero() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);

    let estimator = Estimator::new(store, config());
    let estimate = estimator
        .estimate(&EstimateRequest::new(deal.id))
        .unwrap();

    assert_eq!(estimate.baseline, 0.0);
    assert_eq!(estimate.p50, 0.0);
    assert_eq!(estimate.p80, 0.0);
    assert_eq!(estimate.p95, 0.0);
    assert!(estimate.by_trade.is_empty());
    assert!(estimate.drivers.is_empty());
}

#[test]
fn missing_cost_models_make_the_estimate_a_lower_bound() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);
    // No reference prices exist for this one.
    seed_scope_node(&store, deal.id, "landscaping", "regrade", 1.0, "job");

    let estimator = Estimator::new(store, config_roofing_15pct());
    let estimate = estimator
        .estimate(&EstimateRequest::parametric(deal.id))
        .unwrap();

    // Baseline covers only the modeled roofing line.
    assert!((estimate.baseline - 11_500.0).abs() < 1e-9);
    assert_eq!(estimate.metadata.missing_cost_models.len(), 1);
    assert_eq!(estimate.metadata.missing_cost_models[0].trade, "landscaping");
    assert_eq!(
        estimate.metadata.missing_cost_models[0].canonical_unit,
        CanonicalUnit::Job
    );
}

#[test]
fn unknown_units_warn_but_still_cost_the_line() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_scope_node(&store, deal.id, "electrical", "new-panel", 1.0, "xyz");
    seed_cost_model(&store, "electrical", "new-panel", CanonicalUnit::Ea, 900.0, 1_400.0);

    let estimator = Estimator::new(store, config());
    let estimate = estimator
        .estimate(&EstimateRequest::parametric(deal.id))
        .unwrap();

    // (900 + 1400) × 1.15
    assert!((estimate.baseline - 2_645.0).abs() < 1e-9);
    assert_eq!(estimate.metadata.unit_warnings.len(), 1);
    assert!(estimate.metadata.unit_warnings[0].contains("xyz"));
    assert!(estimate.metadata.missing_cost_models.is_empty());
}

#[test]
fn monte_carlo_band_is_monotone_and_near_parametric_baseline() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let estimator = Estimator::new(store, config_roofing_15pct()).with_seed(42);
    let estimate = estimator
        .estimate(&EstimateRequest {
            mode: UncertaintyMode::MonteCarlo { runs: 2_000 },
            ..EstimateRequest::new(deal.id)
        })
        .unwrap();

    assert!(estimate.p50 <= estimate.p80);
    assert!(estimate.p80 <= estimate.p95);
    // Uniform sampling is symmetric, so the median hugs the baseline.
    assert!((estimate.p50 - estimate.baseline).abs() / estimate.baseline < 0.02);
    assert_eq!(estimate.metadata.runs, Some(2_000));
    assert_eq!(estimate.metadata.seed, Some(42));
}

#[test]
fn seeded_estimates_are_reproducible() {
    let store = store();
    let config = config_roofing_15pct();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let request = EstimateRequest::new(deal.id);
    let a = Estimator::new(store.clone(), config.clone())
        .with_seed(7)
        .estimate(&request)
        .unwrap();
    let b = Estimator::new(store, config)
        .with_seed(7)
        .estimate(&request)
        .unwrap();

    assert_eq!(a.p50, b.p50);
    assert_eq!(a.p80, b.p80);
    assert_eq!(a.p95, b.p95);
}

#[test]
fn run_counts_clamp_into_configured_bounds() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_roofing_scope(&store, deal.id);
    seed_roofing_cost_model(&store);

    let estimator = Estimator::new(store, config()).with_seed(1);
    let estimate = estimator
        .estimate(&EstimateRequest {
            mode: UncertaintyMode::MonteCarlo { runs: 5 },
            ..EstimateRequest::new(deal.id)
        })
        .unwrap();

    assert_eq!(estimate.metadata.runs, Some(100));
}

#[test]
fn drivers_rank_the_most_uncertain_spend_first() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    // Foundation carries far more uncertainty than painting in the
    // default table; give painting the larger baseline.
    seed_scope_node(&store, deal.id, "foundation", "underpin", 100.0, "lf");
    seed_cost_model(&store, "foundation", "underpin", CanonicalUnit::Lf, 80.0, 120.0);
    seed_scope_node(&store, deal.id, "painting", "interior", 4_000.0, "sqft");
    seed_cost_model(&store, "painting", "interior", CanonicalUnit::Sqft, 2.0, 4.0);

    let estimator = Estimator::new(store, config());
    let estimate = estimator
        .estimate(&EstimateRequest::parametric(deal.id))
        .unwrap();

    assert_eq!(estimate.drivers.len(), 2);
    assert_eq!(estimate.drivers[0].trade, "foundation");
    let shares: f64 = estimate.drivers.iter().map(|d| d.uncertainty_share).sum();
    assert!((shares - 1.0).abs() < 1e-9);
    assert!(estimate.drivers[0].baseline_share > 0.0);
}

#[test]
fn unknown_deal_is_fatal() {
    let store = store();
    let estimator = Estimator::new(store, config());
    let err = estimator
        .estimate(&EstimateRequest::new(flipgate_core::types::DealId::new()))
        .unwrap_err();
    assert!(matches!(
        err,
        flipgate_core::errors::EstimateError::DealNotFound(_)
    ));
}
