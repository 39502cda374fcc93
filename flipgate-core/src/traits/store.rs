//! Storage collaborator traits.
//!
//! The engine assumes a transactional host store reached through simple
//! CRUD; these traits are the whole contract. The only mutations the
//! engine performs are the event append, the change-order transition
//! (change-order gate), and the frozen-trades update (variance gate).

use chrono::{DateTime, Utc};

use crate::errors::StorageError;
use crate::types::{
    AuditEvent, Bid, BudgetLedger, CanonicalUnit, ChangeOrder, ChangeOrderId,
    ChangeOrderStatus, CostModel, DealId, DealSpec, EventId, Invoice,
    RegionPolicy, ScopeNode, Vendor, VendorId,
};

pub trait DealStore: Send + Sync {
    fn get_deal(&self, id: DealId) -> Result<Option<DealSpec>, StorageError>;
}

pub trait ScopeStore: Send + Sync {
    fn scope_for_deal(&self, deal: DealId) -> Result<Vec<ScopeNode>, StorageError>;
}

pub trait CostModelStore: Send + Sync {
    /// Look up the reference-price row for a scope line. The unit is the
    /// canonical unit after normalization.
    fn find_cost_model(
        &self,
        region: &str,
        grade: &str,
        trade: &str,
        task: &str,
        unit: CanonicalUnit,
    ) -> Result<Option<CostModel>, StorageError>;
}

pub trait PolicyStore: Send + Sync {
    fn policy_for(
        &self,
        region: &str,
        grade: &str,
    ) -> Result<Option<RegionPolicy>, StorageError>;
}

pub trait LedgerStore: Send + Sync {
    fn ledger_for_deal(
        &self,
        deal: DealId,
    ) -> Result<Option<BudgetLedger>, StorageError>;

    /// Replace the frozen-trades list on a deal's ledger variance state.
    fn set_frozen_trades(
        &self,
        deal: DealId,
        frozen: &[String],
    ) -> Result<(), StorageError>;
}

pub trait BidStore: Send + Sync {
    fn bids_for_deal(&self, deal: DealId) -> Result<Vec<Bid>, StorageError>;
}

pub trait InvoiceStore: Send + Sync {
    fn invoices_for_deal(&self, deal: DealId) -> Result<Vec<Invoice>, StorageError>;
}

pub trait ChangeOrderStore: Send + Sync {
    fn get_change_order(
        &self,
        id: ChangeOrderId,
    ) -> Result<Option<ChangeOrder>, StorageError>;

    fn change_orders_for_deal(
        &self,
        deal: DealId,
    ) -> Result<Vec<ChangeOrder>, StorageError>;

    /// Record the gate's decision on a proposed change order.
    fn transition_change_order(
        &self,
        id: ChangeOrderId,
        status: ChangeOrderStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;
}

pub trait VendorStore: Send + Sync {
    fn get_vendor(&self, id: VendorId) -> Result<Option<Vendor>, StorageError>;
}

pub trait EventStore: Send + Sync {
    /// Append an event. Events are append-only; no update or delete
    /// exists anywhere in the contract. Concurrent appends are safe —
    /// ordering is established by the stored timestamp.
    fn append_event(&self, event: &AuditEvent) -> Result<(), StorageError>;

    fn get_event(&self, id: EventId) -> Result<Option<AuditEvent>, StorageError>;

    /// Events for a deal at or after `since`, newest first.
    fn events_for_deal_since(
        &self,
        deal: DealId,
        since: DateTime<Utc>,
    ) -> Result<Vec<AuditEvent>, StorageError>;
}

/// The full storage contract the engine needs from its host.
pub trait Store:
    DealStore
    + ScopeStore
    + CostModelStore
    + PolicyStore
    + LedgerStore
    + BidStore
    + InvoiceStore
    + ChangeOrderStore
    + VendorStore
    + EventStore
{
}

impl<T> Store for T where
    T: DealStore
        + ScopeStore
        + CostModelStore
        + PolicyStore
        + LedgerStore
        + BidStore
        + InvoiceStore
        + ChangeOrderStore
        + VendorStore
        + EventStore
{
}
