//! Invoice records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{DealId, InvoiceId, VendorId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Submitted,
    Approved,
    Paid,
    Disputed,
}

/// A vendor invoice against a deal's budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub deal_id: DealId,
    pub vendor_id: VendorId,
    pub trade: String,
    pub amount_usd: f64,
    pub status: InvoiceStatus,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}
