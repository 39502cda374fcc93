//! Vendor bid records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{BidId, DealId, VendorId};

/// Bid lifecycle status. Transitions happen outside this engine; the bid
/// spread gate reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Awarded,
    Rejected,
    Expired,
}

/// A quantity as quoted by the vendor, unit string untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidQuantity {
    pub value: f64,
    pub unit: String,
}

/// One line of a vendor bid. `total_usd` is the quoted dollar amount —
/// unit normalization never rescales it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidItem {
    pub trade: String,
    pub task: String,
    pub quantity: BidQuantity,
    pub unit_price_usd: f64,
    pub total_usd: f64,
}

/// A vendor submission for a deal's scope of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub deal_id: DealId,
    pub vendor_id: VendorId,
    pub items: Vec<BidItem>,
    pub subtotal_usd: f64,
    pub status: BidStatus,
    pub submitted_at: DateTime<Utc>,
}
