//! Shared fixtures for the engine integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::Value;

use flipgate_core::config::{EngineConfig, TradeUncertainty};
use flipgate_core::traits::{JobQueue, QueueError};
use flipgate_core::types::*;
use flipgate_storage::SqliteStore;

pub fn store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().unwrap())
}

pub fn config() -> Arc<EngineConfig> {
    Arc::new(EngineConfig::default())
}

/// Config with roofing uncertainty pinned to a 15% combined fraction.
pub fn config_roofing_15pct() -> Arc<EngineConfig> {
    let mut config = EngineConfig::default();
    config.uncertainty.insert(
        "roofing",
        TradeUncertainty {
            material_pct: 0.15,
            labor_pct: 0.15,
        },
    );
    Arc::new(config)
}

pub fn seed_deal(store: &SqliteStore, max_exposure_usd: f64, arv: f64) -> DealSpec {
    let deal = DealSpec {
        id: DealId::new(),
        address: "214 Birchwood Ave".to_string(),
        deal_type: DealType::Flip,
        status: DealStatus::Candidate,
        max_exposure_usd,
        target_roi_pct: 0.20,
        arv,
        region: "midwest".to_string(),
        grade: "b".to_string(),
        daily_burn_usd: 85.0,
        purchased_at: None,
        created_at: Utc::now(),
    };
    store.upsert_deal(&deal).unwrap();
    deal
}

/// 20 roofing squares — 2,000 sqft after normalization.
pub fn seed_roofing_scope(store: &SqliteStore, deal_id: DealId) -> ScopeNode {
    seed_scope_node(store, deal_id, "roofing", "replace-shingles", 20.0, "squares")
}

pub fn seed_scope_node(
    store: &SqliteStore,
    deal_id: DealId,
    trade: &str,
    task: &str,
    value: f64,
    unit: &str,
) -> ScopeNode {
    let node = ScopeNode {
        id: ScopeNodeId::new(),
        deal_id,
        trade: trade.to_string(),
        task: task.to_string(),
        quantity: Quantity {
            value,
            unit: unit.to_string(),
            method: QuantityMethod::Measured,
        },
        finish_level: "standard".to_string(),
        assumptions: Vec::new(),
    };
    store.insert_scope_node(&node).unwrap();
    node
}

/// material 3/sqft, labor 2/sqft, 10% contingency, 5% risk premium.
pub fn seed_roofing_cost_model(store: &SqliteStore) -> CostModel {
    seed_cost_model(store, "roofing", "replace-shingles", CanonicalUnit::Sqft, 3.0, 2.0)
}

pub fn seed_cost_model(
    store: &SqliteStore,
    trade: &str,
    task: &str,
    unit: CanonicalUnit,
    material: f64,
    labor: f64,
) -> CostModel {
    let model = CostModel {
        region: "midwest".to_string(),
        grade: "b".to_string(),
        trade: trade.to_string(),
        task: task.to_string(),
        unit,
        material_per_unit: material,
        labor_per_unit: labor,
        contingency_pct: 0.10,
        risk_premium_pct: 0.05,
    };
    store.upsert_cost_model(&model).unwrap();
    model
}

pub fn seed_ledger(
    store: &SqliteStore,
    deal_id: DealId,
    baseline: f64,
    committed: f64,
    actuals: f64,
) -> BudgetLedger {
    let ledger = BudgetLedger {
        deal_id,
        baseline: BudgetBucket {
            total: baseline,
            ..Default::default()
        },
        committed: BudgetBucket {
            total: committed,
            ..Default::default()
        },
        actuals: BudgetBucket {
            total: actuals,
            ..Default::default()
        },
        variance: VarianceState::default(),
        updated_at: Utc::now(),
    };
    store.upsert_ledger(&ledger).unwrap();
    ledger
}

pub fn seed_vendor(store: &SqliteStore, name: &str) -> Vendor {
    let vendor = Vendor {
        id: VendorId::new(),
        name: name.to_string(),
        trades: vec!["roofing".to_string()],
        region: "midwest".to_string(),
    };
    store.upsert_vendor(&vendor).unwrap();
    vendor
}

/// A pending single-item roofing bid quoted in roofing squares.
pub fn seed_bid(
    store: &SqliteStore,
    deal_id: DealId,
    vendor_id: VendorId,
    total_usd: f64,
) -> Bid {
    let bid = Bid {
        id: BidId::new(),
        deal_id,
        vendor_id,
        items: vec![BidItem {
            trade: "roofing".to_string(),
            task: "replace-shingles".to_string(),
            quantity: BidQuantity {
                value: 20.0,
                unit: "squares".to_string(),
            },
            unit_price_usd: total_usd / 20.0,
            total_usd,
        }],
        subtotal_usd: total_usd,
        status: BidStatus::Pending,
        submitted_at: Utc::now(),
    };
    store.upsert_bid(&bid).unwrap();
    bid
}

pub fn seed_change_order(
    store: &SqliteStore,
    deal_id: DealId,
    delta_usd: f64,
    impact_days: i32,
) -> ChangeOrder {
    let co = ChangeOrder {
        id: ChangeOrderId::new(),
        deal_id,
        trade: "plumbing".to_string(),
        delta_usd,
        impact_days,
        reason: "field condition".to_string(),
        status: ChangeOrderStatus::Proposed,
        created_at: Utc::now(),
        decided_at: None,
    };
    store.upsert_change_order(&co).unwrap();
    co
}

/// Append a gate-style event directly, for panel scans.
pub fn seed_gate_event(
    store: &SqliteStore,
    deal_id: DealId,
    actor: &str,
    artifact: &str,
    action: &str,
    ts: DateTime<Utc>,
) -> AuditEvent {
    use flipgate_core::traits::EventStore;

    let event = AuditEvent {
        id: EventId::new(),
        deal_id: Some(deal_id),
        actor: actor.to_string(),
        artifact: artifact.to_string(),
        action: action.to_string(),
        diff: Vec::new(),
        checksum: "00".repeat(32),
        ts,
    };
    store.append_event(&event).unwrap();
    event
}

/// In-memory job queue test double.
#[derive(Default)]
pub struct MemoryQueue {
    pub jobs: Mutex<Vec<(String, Value)>>,
}

impl JobQueue for MemoryQueue {
    fn enqueue(&self, queue: &str, payload: Value) -> Result<(), QueueError> {
        self.jobs
            .lock()
            .expect("queue mutex")
            .push((queue.to_string(), payload));
        Ok(())
    }
}

/// A queue that always fails, for fire-and-forget behavior tests.
pub struct FailingQueue;

impl JobQueue for FailingQueue {
    fn enqueue(&self, queue: &str, _payload: Value) -> Result<(), QueueError> {
        Err(QueueError {
            queue: queue.to_string(),
            message: "queue unavailable".to_string(),
        })
    }
}
