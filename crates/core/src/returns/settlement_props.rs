//! Property-based tests for the settlement engine.

use kasbook_shared::types::ProductId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::settlement::SettlementService;
use super::types::{ReturnLine, ReturnType, SettlementOutcome};

/// Strategy for a valid line: positive whole quantity, non-negative
/// 2-dp unit price.
fn line_strategy() -> impl Strategy<Value = ReturnLine> {
    (1u32..50u32, 0i64..10_000_000i64).prop_map(|(quantity, cents)| ReturnLine {
        product_id: ProductId::new(),
        quantity,
        unit_price: Decimal::new(cents, 2),
    })
}

fn lines_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<ReturnLine>> {
    prop::collection::vec(line_strategy(), min_len..=max_len)
}

fn sum_of_line_totals(lines: &[ReturnLine]) -> Decimal {
    lines.iter().map(ReturnLine::line_total).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `net_amount == total_new_amount - total_return_amount` exactly,
    /// and totals are the sums of per-line rounded totals.
    #[test]
    fn prop_net_identity(
        return_items in lines_strategy(1, 10),
        new_items in lines_strategy(1, 10),
    ) {
        let settlement =
            SettlementService::settle(ReturnType::Exchange, &return_items, &new_items).unwrap();

        prop_assert_eq!(settlement.total_return_amount, sum_of_line_totals(&return_items));
        prop_assert_eq!(settlement.total_new_amount, sum_of_line_totals(&new_items));
        prop_assert_eq!(
            settlement.net_amount,
            settlement.total_new_amount - settlement.total_return_amount
        );
    }

    /// The outcome always matches the sign of the net amount, and the
    /// magnitudes carried by the outcome are positive.
    #[test]
    fn prop_outcome_matches_sign(
        return_items in lines_strategy(1, 10),
        new_items in lines_strategy(1, 10),
    ) {
        let settlement =
            SettlementService::settle(ReturnType::Exchange, &return_items, &new_items).unwrap();

        match settlement.outcome {
            SettlementOutcome::Refund { amount } => {
                prop_assert!(settlement.net_amount < Decimal::ZERO);
                prop_assert_eq!(amount, -settlement.net_amount);
            }
            SettlementOutcome::AdditionalPayment { amount } => {
                prop_assert!(settlement.net_amount > Decimal::ZERO);
                prop_assert_eq!(amount, settlement.net_amount);
            }
            SettlementOutcome::EvenExchange => {
                prop_assert_eq!(settlement.net_amount, Decimal::ZERO);
            }
        }
    }

    /// A pure return nets to minus its returned total.
    #[test]
    fn prop_pure_return_nets_negative_total(return_items in lines_strategy(1, 10)) {
        let settlement =
            SettlementService::settle(ReturnType::Return, &return_items, &[]).unwrap();

        prop_assert_eq!(settlement.total_new_amount, Decimal::ZERO);
        prop_assert_eq!(settlement.net_amount, -settlement.total_return_amount);
    }

    /// Settlement is a pure function: same input, same output.
    #[test]
    fn prop_deterministic(
        return_items in lines_strategy(1, 10),
        new_items in lines_strategy(1, 10),
    ) {
        let first =
            SettlementService::settle(ReturnType::Exchange, &return_items, &new_items).unwrap();
        let second =
            SettlementService::settle(ReturnType::Exchange, &return_items, &new_items).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Returning the same items taken as new items is always even.
    #[test]
    fn prop_mirrored_items_settle_even(items in lines_strategy(1, 10)) {
        let settlement =
            SettlementService::settle(ReturnType::Exchange, &items, &items).unwrap();
        prop_assert_eq!(settlement.outcome, SettlementOutcome::EvenExchange);
    }
}
