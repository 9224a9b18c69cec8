//! Property-based tests for the running balance engine.

use kasbook_shared::types::{JournalEntryId, LedgerId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::JournalEntry;
use super::service::LedgerService;

fn base_time() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Strategy for a single well-formed entry. Timestamps collide frequently
/// (one day of whole seconds) so the id tie-breaker gets exercised.
fn entry_strategy() -> impl Strategy<Value = JournalEntry> {
    (any::<bool>(), 1i64..100_000_000i64, 0i64..86_400i64).prop_map(
        |(is_debit, cents, seconds)| {
            let amount = Decimal::new(cents, 2);
            JournalEntry {
                id: JournalEntryId::new(),
                ledger_id: LedgerId::new(),
                created_at: base_time() + chrono::TimeDelta::seconds(seconds),
                debit: if is_debit { amount } else { Decimal::ZERO },
                credit: if is_debit { Decimal::ZERO } else { amount },
                notes: "journal line".to_string(),
            }
        },
    )
}

fn entries_strategy(max_len: usize) -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec(entry_strategy(), 0..=max_len)
}

/// A list of entries together with a shuffled copy of itself.
fn entries_with_shuffle() -> impl Strategy<Value = (Vec<JournalEntry>, Vec<JournalEntry>)> {
    entries_strategy(20).prop_flat_map(|entries| {
        let original = entries.clone();
        (Just(original), Just(entries).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shuffling the input must not change the output: the engine sorts
    /// internally by timestamp with id tie-breaking.
    #[test]
    fn prop_order_stable_under_shuffle((original, shuffled) in entries_with_shuffle()) {
        let from_original = LedgerService::running_balances(original).unwrap();
        let from_shuffled = LedgerService::running_balances(shuffled).unwrap();
        prop_assert_eq!(from_original, from_shuffled);
    }

    /// Recomputing from scratch is idempotent: same input, same output.
    #[test]
    fn prop_idempotent(entries in entries_strategy(20)) {
        let first = LedgerService::running_balances(entries.clone()).unwrap();
        let second = LedgerService::running_balances(entries).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every balance is the previous balance plus this entry's
    /// `debit - credit`; the first starts from zero.
    #[test]
    fn prop_chain_invariant(entries in entries_strategy(20)) {
        let lines = LedgerService::running_balances(entries).unwrap();

        let mut previous = Decimal::ZERO;
        for line in &lines {
            prop_assert_eq!(
                line.balance_after,
                previous + line.entry.signed_amount(),
                "balance_after must chain from the previous line"
            );
            prop_assert_eq!(line.balance_before(), previous);
            previous = line.balance_after;
        }
    }

    /// The final balance equals the independent sum of all signed amounts.
    #[test]
    fn prop_final_balance_equals_signed_sum(entries in entries_strategy(20)) {
        let expected: Decimal = entries.iter().map(JournalEntry::signed_amount).sum();
        let total = LedgerService::balance(entries).unwrap();
        prop_assert_eq!(total, expected);
    }

    /// The sorted view is genuinely chronological.
    #[test]
    fn prop_output_is_chronologically_sorted(entries in entries_strategy(20)) {
        let lines = LedgerService::running_balances(entries).unwrap();
        for pair in lines.windows(2) {
            let a = &pair[0].entry;
            let b = &pair[1].entry;
            prop_assert!(
                (a.created_at, a.id) < (b.created_at, b.id),
                "entries must be strictly ordered by (created_at, id)"
            );
        }
    }
}
