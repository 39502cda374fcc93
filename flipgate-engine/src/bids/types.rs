//! Bid comparison output types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use flipgate_core::types::{BidId, VendorId};

/// A bid with its quantities normalized and its dollar totals
/// aggregated. Dollar amounts are carried through unscaled — the unit
/// conversion factor never touches currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedBid {
    pub bid_id: BidId,
    pub vendor_id: VendorId,
    pub total_by_trade: FxHashMap<String, f64>,
    pub grand_total: f64,
    /// Unknown-unit warnings raised during normalization.
    pub warnings: Vec<String>,
}

/// The total a bid is compared on, given the active trade filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparableTotal {
    pub bid_id: BidId,
    pub vendor_id: VendorId,
    pub total: f64,
}

/// A bid flagged as an outlier by the IQR fences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidOutlier {
    pub bid_id: BidId,
    pub vendor_id: VendorId,
    pub total: f64,
    pub low_fence: f64,
    pub high_fence: f64,
}

/// Cross-vendor statistics for one comparable set of bids.
///
/// `spread_pct` is a PERCENT value (`spread / median × 100`). Callers
/// holding a fractional threshold (e.g. 0.15) must convert one side
/// explicitly before comparing — the mismatch is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidComparison {
    pub totals: Vec<ComparableTotal>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub spread: f64,
    pub spread_pct: f64,
    pub outliers: Vec<BidOutlier>,
}
