//! Unit normalization — free-text units → canonical units + factors.
//!
//! Quantities and their units are normalized so per-unit prices and
//! cross-vendor totals are comparable. Dollar amounts are never rescaled
//! by the conversion factor; normalization affects quantity/unit
//! comparability only.

use serde::{Deserialize, Serialize};

use flipgate_core::config::UnitTable;
use flipgate_core::types::CanonicalUnit;

/// Outcome of normalizing a raw unit string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitNorm {
    pub unit: CanonicalUnit,
    pub factor: f64,
    /// False when the raw string missed the alias table and the `ea`/1
    /// fallback was applied.
    pub recognized: bool,
}

/// A quantity converted into its canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    pub value: f64,
    pub unit: CanonicalUnit,
    pub recognized: bool,
}

/// Map a raw unit string to a canonical unit and conversion factor.
///
/// Unknown units fall back to `ea` with factor 1 — a line item is never
/// rejected solely for an unrecognized unit. The miss is logged and
/// reported through `recognized` so callers can surface a warning.
pub fn normalize_unit(table: &UnitTable, raw: &str) -> UnitNorm {
    match table.lookup(raw) {
        Some(alias) => UnitNorm {
            unit: alias.unit,
            factor: alias.factor,
            recognized: true,
        },
        None => {
            tracing::warn!(unit = raw, "unrecognized unit, defaulting to ea");
            UnitNorm {
                unit: CanonicalUnit::Ea,
                factor: 1.0,
                recognized: false,
            }
        }
    }
}

/// Normalize a quantity: `(value × factor, canonical unit)`.
pub fn normalize_quantity(
    table: &UnitTable,
    value: f64,
    raw_unit: &str,
) -> NormalizedQuantity {
    let norm = normalize_unit(table, raw_unit);
    NormalizedQuantity {
        value: value * norm.factor,
        unit: norm.unit,
        recognized: norm.recognized,
    }
}
