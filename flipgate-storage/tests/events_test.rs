//! Append-only event storage behavior.

use chrono::{Duration, Utc};
use flipgate_core::traits::EventStore;
use flipgate_core::types::*;
use flipgate_storage::SqliteStore;
use serde_json::json;

fn event(deal_id: Option<DealId>, action: &str, ts: chrono::DateTime<Utc>) -> AuditEvent {
    AuditEvent {
        id: EventId::new(),
        deal_id,
        actor: "system:G1".to_string(),
        artifact: "deal".to_string(),
        action: action.to_string(),
        diff: vec![DiffOp::Add {
            path: "/".to_string(),
            value: json!({"p80": 12_949.0}),
        }],
        checksum: "ab".repeat(32),
        ts,
    }
}

#[test]
fn append_and_get_round_trip() {
    let store = SqliteStore::open_in_memory().unwrap();
    let deal_id = DealId::new();
    let e = event(Some(deal_id), "APPROVE", Utc::now());
    store.append_event(&e).unwrap();

    let loaded = store.get_event(e.id).unwrap().unwrap();
    assert_eq!(loaded.actor, "system:G1");
    assert_eq!(loaded.deal_id, Some(deal_id));
    assert_eq!(loaded.checksum, e.checksum);
    assert_eq!(loaded.diff, e.diff);

    assert!(store.get_event(EventId::new()).unwrap().is_none());
}

#[test]
fn duplicate_event_ids_are_rejected() {
    let store = SqliteStore::open_in_memory().unwrap();
    let e = event(None, "APPROVE", Utc::now());
    store.append_event(&e).unwrap();
    assert!(store.append_event(&e).is_err());
}

#[test]
fn deal_scan_is_windowed_and_newest_first() {
    let store = SqliteStore::open_in_memory().unwrap();
    let deal_id = DealId::new();
    let now = Utc::now();

    store
        .append_event(&event(Some(deal_id), "BLOCK", now - Duration::days(10)))
        .unwrap();
    store
        .append_event(&event(Some(deal_id), "APPROVE", now - Duration::days(2)))
        .unwrap();
    store
        .append_event(&event(Some(deal_id), "AWARD", now - Duration::days(1)))
        .unwrap();
    store
        .append_event(&event(Some(DealId::new()), "APPROVE", now))
        .unwrap();

    let events = store
        .events_for_deal_since(deal_id, now - Duration::days(7))
        .unwrap();
    let actions: Vec<&str> = events.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["AWARD", "APPROVE"]);
}

#[test]
fn events_without_a_deal_are_storable() {
    let store = SqliteStore::open_in_memory().unwrap();
    let e = event(None, "APPROVE", Utc::now());
    store.append_event(&e).unwrap();
    assert!(store.get_event(e.id).unwrap().unwrap().deal_id.is_none());
}
