//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `LedgerId` where an
//! `OrderId` is expected. IDs are UUID v7, so they are time-ordered and
//! usable as deterministic tie-breakers when sorting by timestamp.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(StoreId, "Unique identifier for a store.");
typed_id!(LedgerId, "Unique identifier for a ledger.");
typed_id!(JournalEntryId, "Unique identifier for a journal entry.");
typed_id!(ProductId, "Unique identifier for a product.");
typed_id!(OrderId, "Unique identifier for an order.");
typed_id!(OrderReturnId, "Unique identifier for an order return.");
