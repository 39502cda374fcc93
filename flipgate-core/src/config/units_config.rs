//! Unit-alias table: free-text unit strings → canonical unit + factor.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::ROOFING_SQUARE_SQFT;
use crate::types::CanonicalUnit;

/// One alias mapping: the canonical unit and the multiplicative factor
/// applied to quantities quoted in the aliased unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitAlias {
    pub unit: CanonicalUnit,
    pub factor: f64,
}

impl UnitAlias {
    fn plain(unit: CanonicalUnit) -> Self {
        Self { unit, factor: 1.0 }
    }
}

/// Immutable alias table, constructed once at startup.
///
/// Keys are canonicalized: lowercased with every non-alphanumeric
/// character stripped, so "Sq. Ft." and "sq ft" land on the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTable {
    aliases: FxHashMap<String, UnitAlias>,
}

impl UnitTable {
    /// Canonicalize a raw unit string into a lookup key.
    pub fn canonical_key(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Look up a raw unit string. `None` means unrecognized; callers fall
    /// back to `ea` with factor 1 and surface a warning.
    pub fn lookup(&self, raw: &str) -> Option<UnitAlias> {
        self.aliases.get(&Self::canonical_key(raw)).copied()
    }

    /// Add or override an alias. Used when loading table overrides from
    /// configuration; the table is not mutated after startup.
    pub fn insert(&mut self, alias: &str, unit: CanonicalUnit, factor: f64) {
        self.aliases
            .insert(Self::canonical_key(alias), UnitAlias { unit, factor });
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        let mut aliases = FxHashMap::default();
        let mut put = |keys: &[&str], alias: UnitAlias| {
            for key in keys {
                aliases.insert(Self::canonical_key(key), alias);
            }
        };

        put(
            &["ea", "each", "unit", "units", "item", "items", "count"],
            UnitAlias::plain(CanonicalUnit::Ea),
        );
        put(
            &[
                "sf",
                "sqft",
                "sq ft",
                "sq. ft.",
                "sqf",
                "square feet",
                "square foot",
                "ft2",
            ],
            UnitAlias::plain(CanonicalUnit::Sqft),
        );
        // A roofing "square" covers 100 sqft.
        put(
            &["square", "squares", "sq"],
            UnitAlias {
                unit: CanonicalUnit::Sqft,
                factor: ROOFING_SQUARE_SQFT,
            },
        );
        put(
            &[
                "lf",
                "lin ft",
                "lin. ft.",
                "linear ft",
                "linear feet",
                "linear foot",
                "ft",
            ],
            UnitAlias::plain(CanonicalUnit::Lf),
        );
        put(
            &["sy", "sq yd", "square yard", "square yards", "yd2"],
            UnitAlias::plain(CanonicalUnit::Sy),
        );
        put(
            &["ton", "tons", "tn"],
            UnitAlias::plain(CanonicalUnit::Ton),
        );
        put(
            &["job", "ls", "lump sum", "lumpsum", "allowance"],
            UnitAlias::plain(CanonicalUnit::Job),
        );

        Self { aliases }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_strips_case_and_punctuation() {
        assert_eq!(UnitTable::canonical_key("Sq. Ft."), "sqft");
        assert_eq!(UnitTable::canonical_key("SQUARES"), "squares");
        assert_eq!(UnitTable::canonical_key("lin ft"), "linft");
    }

    #[test]
    fn default_table_maps_roofing_squares() {
        let table = UnitTable::default();
        let alias = table.lookup("Squares").unwrap();
        assert_eq!(alias.unit, CanonicalUnit::Sqft);
        assert_eq!(alias.factor, 100.0);
    }

    #[test]
    fn unknown_unit_is_none() {
        let table = UnitTable::default();
        assert!(table.lookup("xyz").is_none());
    }
}
