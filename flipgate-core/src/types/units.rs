//! Canonical measurement units.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of canonical units every free-text unit string maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalUnit {
    /// Each / count.
    Ea,
    /// Square feet.
    Sqft,
    /// Linear feet.
    Lf,
    /// Square yards.
    Sy,
    /// Tons.
    Ton,
    /// Lump-sum job.
    Job,
}

impl CanonicalUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ea => "ea",
            Self::Sqft => "sqft",
            Self::Lf => "lf",
            Self::Sy => "sy",
            Self::Ton => "ton",
            Self::Job => "job",
        }
    }

    pub fn all() -> &'static [CanonicalUnit] {
        &[
            Self::Ea,
            Self::Sqft,
            Self::Lf,
            Self::Sy,
            Self::Ton,
            Self::Job,
        ]
    }

    /// Parse a canonical unit string (exact, lowercase).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|u| u.as_str() == s)
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
