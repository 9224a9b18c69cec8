//! Journal entries and running balance computation.
//!
//! This module implements the ledger slice of the bookkeeping system:
//! - Journal entries (one debit-or-credit line each)
//! - Running balance calculation in chronological order
//! - Business rule validation for entries and ledger titles
//! - Draft types for the strict API-boundary parse step
//! - Error types for ledger operations

pub mod balance;
pub mod entry;
pub mod error;
pub mod input;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use balance::BalanceLine;
pub use entry::{EntrySide, JournalEntry, Ledger};
pub use error::LedgerError;
pub use input::{JournalEntryDraft, LedgerDraft};
pub use service::LedgerService;
pub use validation::{
    validate_amounts, validate_entry, validate_title, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
