//! Per-deal evaluation locks.
//!
//! Gate evaluation reads mutable shared state (ledger, bid set) and then
//! writes an event; two concurrent evaluations for the same deal could
//! both pass against a stale read. Serializing per deal closes that
//! window. The event append itself needs no lock — it is append-only and
//! ordered by the stored timestamp.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use flipgate_core::types::DealId;

#[derive(Default)]
pub(crate) struct DealLocks {
    inner: Mutex<FxHashMap<DealId, Arc<Mutex<()>>>>,
}

impl DealLocks {
    /// The lock handle for one deal, created on first use.
    pub fn handle(&self, deal: DealId) -> Arc<Mutex<()>> {
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        map.entry(deal).or_default().clone()
    }
}

/// Lock a handle, recovering from poisoning — a panicked evaluation must
/// not wedge every future evaluation for the deal.
pub(crate) fn lock(handle: &Mutex<()>) -> MutexGuard<'_, ()> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
