//! Change-order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{ChangeOrderId, DealId};

/// Change-order lifecycle. Created by a requester as `Proposed`;
/// transitioned to `Approved`/`Denied` by the change-order gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOrderStatus {
    Proposed,
    Approved,
    Denied,
    Cancelled,
}

/// A mid-project cost/schedule change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOrder {
    pub id: ChangeOrderId,
    pub deal_id: DealId,
    pub trade: String,
    /// Signed cost delta: positive for increases, negative for savings.
    pub delta_usd: f64,
    /// Signed schedule delta in days.
    pub impact_days: i32,
    pub reason: String,
    pub status: ChangeOrderStatus,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}
