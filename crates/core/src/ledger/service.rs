//! Ledger service for running balance computation.
//!
//! This service contains pure business logic with no database dependencies.
//! It takes an immutable snapshot of a ledger's entries and returns a fresh
//! running balance view; it is safe to call concurrently.

use rust_decimal::Decimal;
use tracing::debug;

use super::balance::{chronological, BalanceLine};
use super::entry::JournalEntry;
use super::error::LedgerError;
use super::validation;

/// Ledger service computing derived balance views.
pub struct LedgerService;

impl LedgerService {
    /// Computes the running balance after each entry.
    ///
    /// Entries are sorted internally by `(created_at, id)` ascending, so the
    /// order the caller supplies them in is irrelevant. The balance starts
    /// at zero and each entry contributes `debit - credit`. All arithmetic
    /// is exact decimal; nothing is rounded mid-fold.
    ///
    /// An empty ledger is not an error: it yields an empty view.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidEntry` or `LedgerError::NegativeAmount`
    /// if any entry violates the arithmetic invariant. No partial result is
    /// produced in that case.
    pub fn running_balances(
        entries: Vec<JournalEntry>,
    ) -> Result<Vec<BalanceLine>, LedgerError> {
        for entry in &entries {
            validation::validate_amounts(entry)?;
        }

        let mut entries = entries;
        entries.sort_by(chronological);

        debug!(entries = entries.len(), "computing running balances");

        let mut balance = Decimal::ZERO;
        let lines = entries
            .into_iter()
            .map(|entry| {
                balance += entry.signed_amount();
                BalanceLine {
                    entry,
                    balance_after: balance,
                }
            })
            .collect();

        Ok(lines)
    }

    /// Computes the ledger's total balance (zero for an empty ledger).
    ///
    /// Equals the final `balance_after` of [`Self::running_balances`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::running_balances`].
    pub fn balance(entries: Vec<JournalEntry>) -> Result<Decimal, LedgerError> {
        let lines = Self::running_balances(entries)?;
        Ok(lines.last().map_or(Decimal::ZERO, |line| line.balance_after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasbook_shared::types::{JournalEntryId, LedgerId};
    use rust_decimal_macros::dec;

    fn make_entry(second: u32, debit: Decimal, credit: Decimal) -> JournalEntry {
        JournalEntry {
            id: JournalEntryId::new(),
            ledger_id: LedgerId::new(),
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, second)
                .unwrap(),
            debit,
            credit,
            notes: "register entry".to_string(),
        }
    }

    #[test]
    fn test_running_balances_in_timestamp_order() {
        // 100 debit, 40 credit, 10 credit -> balances 100, 60, 50
        let entries = vec![
            make_entry(1, dec!(100), dec!(0)),
            make_entry(2, dec!(0), dec!(40)),
            make_entry(3, dec!(0), dec!(10)),
        ];

        let lines = LedgerService::running_balances(entries).unwrap();
        let balances: Vec<_> = lines.iter().map(|l| l.balance_after).collect();
        assert_eq!(balances, vec![dec!(100), dec!(60), dec!(50)]);
    }

    #[test]
    fn test_caller_order_is_irrelevant() {
        let a = make_entry(1, dec!(100), dec!(0));
        let b = make_entry(2, dec!(0), dec!(40));
        let c = make_entry(3, dec!(0), dec!(10));

        let shuffled = vec![c.clone(), a.clone(), b.clone()];
        let lines = LedgerService::running_balances(shuffled).unwrap();

        let ids: Vec<_> = lines.iter().map(|l| l.entry.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        assert_eq!(lines.last().unwrap().balance_after, dec!(50));
    }

    #[test]
    fn test_empty_ledger_is_not_an_error() {
        let lines = LedgerService::running_balances(vec![]).unwrap();
        assert!(lines.is_empty());
        assert_eq!(LedgerService::balance(vec![]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let entries = vec![
            make_entry(1, dec!(20), dec!(0)),
            make_entry(2, dec!(0), dec!(50)),
        ];
        assert_eq!(LedgerService::balance(entries).unwrap(), dec!(-30));
    }

    #[test]
    fn test_both_sides_set_rejects_whole_computation() {
        let entries = vec![
            make_entry(1, dec!(100), dec!(0)),
            make_entry(2, dec!(50), dec!(50)),
        ];
        assert!(matches!(
            LedgerService::running_balances(entries),
            Err(LedgerError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_no_exact_precision_drift() {
        // 0.10 added ten times is exactly 1.00 in decimal arithmetic.
        let entries: Vec<_> = (0..10)
            .map(|i| make_entry(i, dec!(0.10), dec!(0)))
            .collect();
        assert_eq!(LedgerService::balance(entries).unwrap(), dec!(1.00));
    }

    #[test]
    fn test_final_balance_matches_running_view() {
        let entries = vec![
            make_entry(1, dec!(75.25), dec!(0)),
            make_entry(2, dec!(0), dec!(25.25)),
            make_entry(3, dec!(10.00), dec!(0)),
        ];
        let lines = LedgerService::running_balances(entries.clone()).unwrap();
        let total = LedgerService::balance(entries).unwrap();
        assert_eq!(lines.last().unwrap().balance_after, total);
        assert_eq!(total, dec!(60.00));
    }
}
