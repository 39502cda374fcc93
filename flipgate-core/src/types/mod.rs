//! Domain record types shared across the engine and storage crates.

pub mod bid;
pub mod change_order;
pub mod cost_model;
pub mod deal;
pub mod event;
pub mod identifiers;
pub mod invoice;
pub mod ledger;
pub mod scope;
pub mod units;
pub mod vendor;

pub use bid::{Bid, BidItem, BidQuantity, BidStatus};
pub use change_order::{ChangeOrder, ChangeOrderStatus};
pub use cost_model::{CostModel, RegionPolicy};
pub use deal::{DealSpec, DealStatus, DealType};
pub use event::{AuditEvent, DiffOp};
pub use identifiers::{
    BidId, ChangeOrderId, DealId, EventId, InvoiceId, ScopeNodeId, VendorId,
};
pub use invoice::{Invoice, InvoiceStatus};
pub use ledger::{BudgetBucket, BudgetLedger, VarianceState};
pub use scope::{Quantity, QuantityMethod, ScopeNode};
pub use units::CanonicalUnit;
pub use vendor::Vendor;
