//! Ledger error types for validation and computation errors.

use kasbook_shared::error::AppError;
use kasbook_shared::types::amount::AmountParseError;
use kasbook_shared::types::JournalEntryId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::validation::{TITLE_MAX_CHARS, TITLE_MIN_CHARS};

/// Errors that can occur during ledger operations.
///
/// All variants are synchronous validation failures; none are retryable.
/// A failure discards the whole computation, never a partial result.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entry must set exactly one of debit or credit.
    #[error(
        "Entry {entry_id} must set exactly one of debit or credit \
         (debit: {debit}, credit: {credit})"
    )]
    InvalidEntry {
        /// The offending entry.
        entry_id: JournalEntryId,
        /// The debit amount found.
        debit: Decimal,
        /// The credit amount found.
        credit: Decimal,
    },

    /// Entry amounts cannot be negative.
    #[error("Entry {entry_id} has a negative amount (debit: {debit}, credit: {credit})")]
    NegativeAmount {
        /// The offending entry.
        entry_id: JournalEntryId,
        /// The debit amount found.
        debit: Decimal,
        /// The credit amount found.
        credit: Decimal,
    },

    /// Entry notes are required.
    #[error("Entry {entry_id} has empty notes")]
    EmptyNotes {
        /// The offending entry.
        entry_id: JournalEntryId,
    },

    /// Ledger title length is out of range.
    #[error(
        "Ledger title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} \
         characters, got {length}"
    )]
    InvalidTitle {
        /// Character count of the rejected title (after trimming).
        length: usize,
    },

    /// A string-encoded amount failed the strict parse step.
    #[error("Invalid {field} amount: {source}")]
    InvalidAmount {
        /// Which field carried the bad amount.
        field: &'static str,
        /// The underlying parse failure.
        source: AmountParseError,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEntry { .. } => "INVALID_ENTRY",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::EmptyNotes { .. } => "EMPTY_NOTES",
            Self::InvalidTitle { .. } => "INVALID_TITLE",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
