//! `SqliteStore` — the engine's storage contract over one connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use flipgate_core::errors::StorageError;
use flipgate_core::traits::{
    BidStore, ChangeOrderStore, CostModelStore, DealStore, EventStore,
    InvoiceStore, LedgerStore, PolicyStore, ScopeStore, VendorStore,
};
use flipgate_core::types::{
    AuditEvent, Bid, BudgetLedger, CanonicalUnit, ChangeOrder, ChangeOrderId,
    ChangeOrderStatus, CostModel, DealId, DealSpec, EventId, Invoice,
    RegionPolicy, ScopeNode, Vendor, VendorId,
};

use crate::connection;
use crate::queries;

/// SQLite-backed implementation of the full `Store` contract.
///
/// The connection sits behind a mutex so the store is `Send + Sync`;
/// SQLite's WAL mode plus the busy timeout handle cross-process
/// contention.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            conn: Mutex::new(connection::open(path)?),
        })
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Mutex::new(connection::open_in_memory()?),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Host-side write paths. The engine never calls these; deal-editing
    // flows, scoping, bid intake, and invoice processing do.

    pub fn upsert_deal(&self, deal: &DealSpec) -> Result<(), StorageError> {
        queries::deals::upsert_deal(&self.conn(), deal)
    }

    pub fn insert_scope_node(&self, node: &ScopeNode) -> Result<(), StorageError> {
        queries::scope::insert_scope_node(&self.conn(), node)
    }

    pub fn upsert_cost_model(&self, model: &CostModel) -> Result<(), StorageError> {
        queries::cost_models::upsert_cost_model(&self.conn(), model)
    }

    pub fn upsert_policy(&self, policy: &RegionPolicy) -> Result<(), StorageError> {
        queries::policies::upsert_policy(&self.conn(), policy)
    }

    pub fn upsert_ledger(&self, ledger: &BudgetLedger) -> Result<(), StorageError> {
        queries::ledgers::upsert_ledger(&self.conn(), ledger)
    }

    pub fn upsert_bid(&self, bid: &Bid) -> Result<(), StorageError> {
        queries::bids::upsert_bid(&self.conn(), bid)
    }

    pub fn upsert_invoice(&self, invoice: &Invoice) -> Result<(), StorageError> {
        queries::invoices::upsert_invoice(&self.conn(), invoice)
    }

    pub fn upsert_change_order(&self, co: &ChangeOrder) -> Result<(), StorageError> {
        queries::change_orders::upsert_change_order(&self.conn(), co)
    }

    pub fn upsert_vendor(&self, vendor: &Vendor) -> Result<(), StorageError> {
        queries::vendors::upsert_vendor(&self.conn(), vendor)
    }
}

impl DealStore for SqliteStore {
    fn get_deal(&self, id: DealId) -> Result<Option<DealSpec>, StorageError> {
        queries::deals::get_deal(&self.conn(), id)
    }
}

impl ScopeStore for SqliteStore {
    fn scope_for_deal(&self, deal: DealId) -> Result<Vec<ScopeNode>, StorageError> {
        queries::scope::scope_for_deal(&self.conn(), deal)
    }
}

impl CostModelStore for SqliteStore {
    fn find_cost_model(
        &self,
        region: &str,
        grade: &str,
        trade: &str,
        task: &str,
        unit: CanonicalUnit,
    ) -> Result<Option<CostModel>, StorageError> {
        queries::cost_models::find_cost_model(
            &self.conn(),
            region,
            grade,
            trade,
            task,
            unit,
        )
    }
}

impl PolicyStore for SqliteStore {
    fn policy_for(
        &self,
        region: &str,
        grade: &str,
    ) -> Result<Option<RegionPolicy>, StorageError> {
        queries::policies::policy_for(&self.conn(), region, grade)
    }
}

impl LedgerStore for SqliteStore {
    fn ledger_for_deal(
        &self,
        deal: DealId,
    ) -> Result<Option<BudgetLedger>, StorageError> {
        queries::ledgers::ledger_for_deal(&self.conn(), deal)
    }

    fn set_frozen_trades(
        &self,
        deal: DealId,
        frozen: &[String],
    ) -> Result<(), StorageError> {
        queries::ledgers::set_frozen_trades(&self.conn(), deal, frozen)
    }
}

impl BidStore for SqliteStore {
    fn bids_for_deal(&self, deal: DealId) -> Result<Vec<Bid>, StorageError> {
        queries::bids::bids_for_deal(&self.conn(), deal)
    }
}

impl InvoiceStore for SqliteStore {
    fn invoices_for_deal(&self, deal: DealId) -> Result<Vec<Invoice>, StorageError> {
        queries::invoices::invoices_for_deal(&self.conn(), deal)
    }
}

impl ChangeOrderStore for SqliteStore {
    fn get_change_order(
        &self,
        id: ChangeOrderId,
    ) -> Result<Option<ChangeOrder>, StorageError> {
        queries::change_orders::get_change_order(&self.conn(), id)
    }

    fn change_orders_for_deal(
        &self,
        deal: DealId,
    ) -> Result<Vec<ChangeOrder>, StorageError> {
        queries::change_orders::change_orders_for_deal(&self.conn(), deal)
    }

    fn transition_change_order(
        &self,
        id: ChangeOrderId,
        status: ChangeOrderStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        queries::change_orders::transition_change_order(
            &self.conn(),
            id,
            status,
            decided_at,
        )
    }
}

impl VendorStore for SqliteStore {
    fn get_vendor(&self, id: VendorId) -> Result<Option<Vendor>, StorageError> {
        queries::vendors::get_vendor(&self.conn(), id)
    }
}

impl EventStore for SqliteStore {
    fn append_event(&self, event: &AuditEvent) -> Result<(), StorageError> {
        queries::events::append_event(&self.conn(), event)
    }

    fn get_event(&self, id: EventId) -> Result<Option<AuditEvent>, StorageError> {
        queries::events::get_event(&self.conn(), id)
    }

    fn events_for_deal_since(
        &self,
        deal: DealId,
        since: DateTime<Utc>,
    ) -> Result<Vec<AuditEvent>, StorageError> {
        queries::events::events_for_deal_since(&self.conn(), deal, since)
    }
}
