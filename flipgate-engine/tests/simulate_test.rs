//! Change-order simulator behavior.

mod common;

use flipgate_core::errors::SimulationError;
use flipgate_core::types::DealId;
use flipgate_engine::simulate::CoSimulator;

use common::*;

#[test]
fn zero_delta_leaves_after_equal_to_before() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 20_000.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, 0.0, 0).unwrap();

    assert_eq!(result.after, result.before);
    assert_eq!(result.deltas.cost, 0.0);
    assert_eq!(result.deltas.p80, 0.0);
    assert_eq!(result.deltas.roi_pct, 0.0);
}

#[test]
fn base_cost_prefers_committed_and_adds_actuals() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 20_000.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, 0.0, 0).unwrap();

    assert_eq!(result.base_cost, 170_000.0);
    assert_eq!(result.before.p50, 170_000.0);
    assert!((result.before.p80 - 187_000.0).abs() < 1e-6);
    assert!((result.before.p95 - 200_600.0).abs() < 1e-6);
}

#[test]
fn zero_committed_falls_back_to_baseline() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 0.0, 10_000.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, 0.0, 0).unwrap();
    assert_eq!(result.base_cost, 110_000.0);
}

#[test]
fn cost_increases_carry_extra_contingency_and_risk() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, 10_000.0, 7).unwrap();

    // p80 moves by delta × 1.10, p95 by delta × 1.18.
    assert!((result.after.p80 - (result.before.p80 + 11_000.0)).abs() < 1e-6);
    assert!((result.after.p95 - (result.before.p95 + 11_800.0)).abs() < 1e-6);
    assert_eq!(result.after.p50, 160_000.0);
    assert_eq!(result.deltas.impact_days, 7);
}

#[test]
fn savings_are_taken_at_face_value() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, -10_000.0, -3).unwrap();

    assert!((result.after.p80 - (result.before.p80 - 10_000.0)).abs() < 1e-6);
    assert!((result.after.p95 - (result.before.p95 - 10_000.0)).abs() < 1e-6);
    assert!(result.deltas.roi_pct > 0.0);
}

#[test]
fn empty_ledger_never_divides_by_zero() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 0.0, 0.0, 0.0);

    let sim = CoSimulator::new(store, config());
    let result = sim.simulate_co(deal.id, 0.0, 0).unwrap();

    assert_eq!(result.base_cost, 0.0);
    assert_eq!(result.before.roi_pct, 0.0);
    assert_eq!(result.after.roi_pct, 0.0);
    assert!(result.before.p80.is_finite());
}

#[test]
fn evaluation_approves_inside_both_guardrails() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    let eval = sim.evaluate_co(deal.id, 20_000.0, 10).unwrap();

    assert!(!eval.exposure_violation);
    assert!(!eval.roi_violation);
    assert!(eval.approved);
}

#[test]
fn evaluation_blocks_on_exposure() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    // before.p80 = 165k; 35k × 1.10 pushes past the 200k cap.
    let eval = sim.evaluate_co(deal.id, 35_000.0, 10).unwrap();

    assert!(eval.exposure_violation);
    assert!(!eval.approved);
}

#[test]
fn evaluation_blocks_on_roi() {
    let store = store();
    let deal = seed_deal(&store, 400_000.0, 200_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    // Cost after 180k against a 200k ARV: roi 0.111 < 0.20 target.
    let eval = sim.evaluate_co(deal.id, 30_000.0, 0).unwrap();

    assert!(!eval.exposure_violation);
    assert!(eval.roi_violation);
    assert!(!eval.approved);
    assert!(eval.message.contains("roi"));
}

#[test]
fn exposure_is_reported_first_when_both_are_violated() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 200_000.0);
    seed_ledger(&store, deal.id, 100_000.0, 150_000.0, 0.0);

    let sim = CoSimulator::new(store, config());
    let eval = sim.evaluate_co(deal.id, 40_000.0, 0).unwrap();

    assert!(eval.exposure_violation);
    assert!(eval.roi_violation);
    assert!(eval.message.contains("exposure"));
    assert!(!eval.message.contains("target"));
}

#[test]
fn missing_ledger_is_fatal() {
    let store = store();
    let deal = seed_deal(&store, 200_000.0, 320_000.0);

    let sim = CoSimulator::new(store, config());
    let err = sim.simulate_co(deal.id, 1_000.0, 0).unwrap_err();
    assert!(matches!(err, SimulationError::LedgerNotFound(_)));
}

#[test]
fn missing_deal_is_fatal() {
    let store = store();
    let sim = CoSimulator::new(store, config());
    let err = sim.simulate_co(DealId::new(), 1_000.0, 0).unwrap_err();
    assert!(matches!(err, SimulationError::DealNotFound(_)));
}
