//! Running balance view over a ledger's journal entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// One row of the running balance view: an entry plus the cumulative
/// balance after it, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLine {
    /// The journal entry.
    pub entry: JournalEntry,
    /// Cumulative balance including this entry.
    pub balance_after: Decimal,
}

impl BalanceLine {
    /// The balance before this entry was applied.
    #[must_use]
    pub fn balance_before(&self) -> Decimal {
        self.balance_after - self.entry.signed_amount()
    }
}

/// Chronological ordering for journal entries: ascending `created_at`,
/// ties broken by ascending `id` for determinism.
#[must_use]
pub fn chronological(a: &JournalEntry, b: &JournalEntry) -> std::cmp::Ordering {
    a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))
}
