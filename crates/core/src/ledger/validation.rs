//! Business rule validation for ledger records.

use super::entry::JournalEntry;
use super::error::LedgerError;

/// Minimum ledger title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum ledger title length in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Validates the arithmetic invariant of a journal entry.
///
/// Exactly one of debit/credit must be non-zero, and neither may be
/// negative. This is the subset the balance engine re-checks; it never
/// silently picks a side for a malformed entry.
///
/// # Errors
///
/// Returns `NegativeAmount` or `InvalidEntry` on violation.
pub fn validate_amounts(entry: &JournalEntry) -> Result<(), LedgerError> {
    if entry.debit.is_sign_negative() || entry.credit.is_sign_negative() {
        return Err(LedgerError::NegativeAmount {
            entry_id: entry.id,
            debit: entry.debit,
            credit: entry.credit,
        });
    }

    if entry.side().is_none() {
        return Err(LedgerError::InvalidEntry {
            entry_id: entry.id,
            debit: entry.debit,
            credit: entry.credit,
        });
    }

    Ok(())
}

/// Validates a journal entry at the creation boundary.
///
/// Checks the arithmetic invariant plus the domain rules the engine itself
/// does not re-validate (non-empty notes).
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_entry(entry: &JournalEntry) -> Result<(), LedgerError> {
    validate_amounts(entry)?;

    if entry.notes.trim().is_empty() {
        return Err(LedgerError::EmptyNotes { entry_id: entry.id });
    }

    Ok(())
}

/// Validates a ledger title (3-255 characters after trimming).
///
/// Uniqueness per store is a persistence concern and is checked elsewhere.
///
/// # Errors
///
/// Returns `InvalidTitle` when the length is out of range.
pub fn validate_title(title: &str) -> Result<(), LedgerError> {
    let length = title.trim().chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&length) {
        return Err(LedgerError::InvalidTitle { length });
    }
    Ok(())
}
