//! Scope-of-work line items.

use serde::{Deserialize, Serialize};

use super::identifiers::{DealId, ScopeNodeId};

/// How a quantity was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityMethod {
    Measured,
    Estimated,
    Allowance,
}

/// A measured or estimated quantity with its raw unit string.
///
/// The unit is free text as entered ("SF", "Squares", "lin ft"); the
/// engine normalizes it at estimation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
    pub method: QuantityMethod,
}

/// One line of rehab work belonging to a deal. Read-only for the
/// estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeNode {
    pub id: ScopeNodeId,
    pub deal_id: DealId,
    pub trade: String,
    pub task: String,
    pub quantity: Quantity,
    pub finish_level: String,
    pub assumptions: Vec<String>,
}
