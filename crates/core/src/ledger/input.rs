//! Draft types for the API-boundary parse step.
//!
//! Payloads arrive with amounts encoded as strings and optional fields.
//! Drafts deserialize that shape as-is and convert into validated domain
//! records through a strict parse: ambiguous input is rejected, never
//! coerced.

use chrono::NaiveDateTime;
use kasbook_shared::types::amount::parse_amount;
use kasbook_shared::types::{JournalEntryId, LedgerId, StoreId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::entry::{JournalEntry, Ledger};
use super::error::LedgerError;
use super::validation;

/// Unvalidated journal entry as submitted by the creation form.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntryDraft {
    /// The owning ledger.
    pub ledger_id: LedgerId,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// String-encoded debit amount; absent means zero.
    #[serde(default)]
    pub debit: Option<String>,
    /// String-encoded credit amount; absent means zero.
    #[serde(default)]
    pub credit: Option<String>,
    /// Free-text description.
    pub notes: String,
}

impl JournalEntryDraft {
    /// Parses and validates the draft into an immutable [`JournalEntry`],
    /// assigning a fresh time-ordered ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when an amount string fails the strict
    /// parse, or any entry validation error (exactly-one-side rule,
    /// negative amounts, empty notes).
    pub fn into_entry(self) -> Result<JournalEntry, LedgerError> {
        let debit = parse_side(self.debit.as_deref(), "debit")?;
        let credit = parse_side(self.credit.as_deref(), "credit")?;

        let entry = JournalEntry {
            id: JournalEntryId::new(),
            ledger_id: self.ledger_id,
            created_at: self.created_at,
            debit,
            credit,
            notes: self.notes,
        };

        validation::validate_entry(&entry)?;
        Ok(entry)
    }
}

/// An absent side is zero; a present side must parse strictly. An empty
/// string is rejected rather than read as zero.
fn parse_side(raw: Option<&str>, field: &'static str) -> Result<Decimal, LedgerError> {
    match raw {
        None => Ok(Decimal::ZERO),
        Some(value) => {
            parse_amount(value).map_err(|source| LedgerError::InvalidAmount { field, source })
        }
    }
}

/// Unvalidated ledger as submitted by the creation form.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerDraft {
    /// Display title.
    pub title: String,
    /// The store this ledger belongs to.
    pub store_id: StoreId,
}

impl LedgerDraft {
    /// Validates the draft into a [`Ledger`] with a fresh ID.
    ///
    /// The title is stored trimmed. Per-store uniqueness is enforced by the
    /// persistence layer, not here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTitle` when the title length is out of range.
    pub fn into_ledger(self) -> Result<Ledger, LedgerError> {
        validation::validate_title(&self.title)?;
        Ok(Ledger {
            id: LedgerId::new(),
            title: self.title.trim().to_string(),
            store_id: self.store_id,
        })
    }
}
