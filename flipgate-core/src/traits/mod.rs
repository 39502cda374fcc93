//! Collaborator traits: the contracts the engine needs from its host.

pub mod job_queue;
pub mod store;

pub use job_queue::{JobQueue, QueueError};
pub use store::{
    BidStore, ChangeOrderStore, CostModelStore, DealStore, EventStore,
    InvoiceStore, LedgerStore, PolicyStore, ScopeStore, Store, VendorStore,
};
