//! Ledger and journal entry domain types.

use chrono::NaiveDateTime;
use kasbook_shared::types::{JournalEntryId, LedgerId, StoreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named account bucket holding journal entries for one store.
///
/// The running balance is a derived view computed by
/// [`LedgerService`](super::LedgerService), never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// The ledger ID.
    pub id: LedgerId,
    /// Display title, 3-255 characters, unique per store.
    pub title: String,
    /// The store this ledger belongs to.
    pub store_id: StoreId,
}

/// One debit-or-credit accounting line attached to a ledger.
///
/// Invariant: exactly one of `debit`/`credit` is non-zero, and both are
/// non-negative. Entries are immutable once created; the balance engine
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The entry ID (time-ordered, used as sort tie-breaker).
    pub id: JournalEntryId,
    /// The owning ledger.
    pub ledger_id: LedgerId,
    /// Creation timestamp governing chronological order.
    pub created_at: NaiveDateTime,
    /// Debit amount (non-negative; zero when this is a credit line).
    pub debit: Decimal,
    /// Credit amount (non-negative; zero when this is a debit line).
    pub credit: Decimal,
    /// Free-text description, required non-empty.
    pub notes: String,
}

impl JournalEntry {
    /// The entry's contribution to the running balance.
    ///
    /// Debit increases the balance, credit decreases it. This single global
    /// sign rule applies to every ledger regardless of account type.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Which side of the ledger this entry posts to, or `None` when the
    /// entry violates the exactly-one-side invariant.
    #[must_use]
    pub fn side(&self) -> Option<EntrySide> {
        EntrySide::from_amounts(self.debit, self.credit)
    }
}

/// The side of the ledger an entry posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry (increases the balance).
    Debit,
    /// Credit entry (decreases the balance).
    Credit,
}

impl EntrySide {
    /// Classifies a debit/credit amount pair, or `None` when both or
    /// neither side is set.
    #[must_use]
    pub fn from_amounts(debit: Decimal, credit: Decimal) -> Option<Self> {
        match (debit.is_zero(), credit.is_zero()) {
            (false, true) => Some(Self::Debit),
            (true, false) => Some(Self::Credit),
            _ => None,
        }
    }
}
