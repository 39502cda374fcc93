//! Serialization shapes of the domain records.

use chrono::Utc;
use flipgate_core::types::*;
use serde_json::json;

#[test]
fn ids_serialize_transparently() {
    let id = DealId::new();
    let v = serde_json::to_value(id).unwrap();
    assert_eq!(v, json!(id.inner().to_string()));
}

#[test]
fn deal_enums_use_kebab_and_lowercase() {
    assert_eq!(
        serde_json::to_value(DealType::BuyAndHold).unwrap(),
        json!("buy-and-hold")
    );
    assert_eq!(
        serde_json::to_value(DealStatus::Candidate).unwrap(),
        json!("candidate")
    );
    assert_eq!(
        serde_json::to_value(ChangeOrderStatus::Proposed).unwrap(),
        json!("proposed")
    );
}

#[test]
fn ledger_budgeted_total_prefers_committed() {
    let mut ledger = BudgetLedger {
        deal_id: DealId::new(),
        baseline: BudgetBucket {
            total: 100_000.0,
            ..Default::default()
        },
        committed: BudgetBucket::default(),
        actuals: BudgetBucket::default(),
        variance: VarianceState::default(),
        updated_at: Utc::now(),
    };
    assert_eq!(ledger.budgeted_total(), 100_000.0);

    ledger.committed.total = 90_000.0;
    assert_eq!(ledger.budgeted_total(), 90_000.0);
}

#[test]
fn ledger_trades_unions_all_buckets() {
    let mut ledger = BudgetLedger {
        deal_id: DealId::new(),
        baseline: BudgetBucket::default(),
        committed: BudgetBucket::default(),
        actuals: BudgetBucket::default(),
        variance: VarianceState::default(),
        updated_at: Utc::now(),
    };
    ledger.baseline.by_trade.insert("roofing".to_string(), 1.0);
    ledger.committed.by_trade.insert("drywall".to_string(), 2.0);
    ledger.actuals.by_trade.insert("roofing".to_string(), 3.0);

    assert_eq!(ledger.trades(), vec!["drywall", "roofing"]);
}

#[test]
fn canonical_unit_parses_its_own_strings() {
    for unit in CanonicalUnit::all() {
        assert_eq!(CanonicalUnit::parse(unit.as_str()), Some(*unit));
    }
    assert_eq!(CanonicalUnit::parse("bogus"), None);
}
