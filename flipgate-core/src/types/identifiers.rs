//! Uuid-backed ID types for type-safe record identifiers.
//!
//! Each ID type wraps a `uuid::Uuid` to prevent cross-type confusion.
//! A `DealId` cannot be accidentally used where a `BidId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random (v4) ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the inner `Uuid`.
            pub fn inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Deal identifier.
    DealId
);

define_id!(
    /// Scope-of-work line identifier.
    ScopeNodeId
);

define_id!(
    /// Vendor bid identifier.
    BidId
);

define_id!(
    /// Invoice identifier.
    InvoiceId
);

define_id!(
    /// Change-order identifier.
    ChangeOrderId
);

define_id!(
    /// Vendor identifier.
    VendorId
);

define_id!(
    /// Audit event identifier.
    EventId
);
