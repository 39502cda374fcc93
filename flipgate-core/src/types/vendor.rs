//! Vendor records.

use serde::{Deserialize, Serialize};

use super::identifiers::VendorId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub trades: Vec<String>,
    pub region: String,
}
