//! Net settlement computation for returns and exchanges.
//!
//! Pure, synchronous computation over immutable inputs: safe to invoke
//! from any number of render cycles at once, no side effects.

use rust_decimal::Decimal;
use tracing::debug;

use super::error::SettlementError;
use super::types::{ReturnLine, ReturnType, Settlement, SettlementOutcome};

/// Settlement service computing the net monetary outcome of a return.
pub struct SettlementService;

impl SettlementService {
    /// Computes totals, the signed net amount, and the outcome for one
    /// return/exchange transaction.
    ///
    /// Line totals are rounded to 2 decimal places per line (not after
    /// summation), then summed exactly:
    /// `net = total_new - total_return`. Negative net means the store owes
    /// the customer; positive means the customer owes more; zero is an
    /// even exchange.
    ///
    /// # Errors
    ///
    /// - `EmptyReturn` when `return_items` is empty (every return must
    ///   give at least one item back).
    /// - `MissingExchangeItems` when an exchange has no new items. An
    ///   empty `new_items` list is valid only for a pure return.
    /// - `InvalidQuantity` / `InvalidUnitPrice` when a line violates
    ///   `quantity > 0` or `unit_price >= 0`.
    pub fn settle(
        return_type: ReturnType,
        return_items: &[ReturnLine],
        new_items: &[ReturnLine],
    ) -> Result<Settlement, SettlementError> {
        if return_items.is_empty() {
            return Err(SettlementError::EmptyReturn);
        }
        if return_type == ReturnType::Exchange && new_items.is_empty() {
            return Err(SettlementError::MissingExchangeItems);
        }

        let total_return_amount = Self::sum_lines(return_items)?;
        let total_new_amount = Self::sum_lines(new_items)?;
        let net_amount = total_new_amount - total_return_amount;

        debug!(
            %total_return_amount,
            %total_new_amount,
            %net_amount,
            "settled return"
        );

        Ok(Settlement {
            total_return_amount,
            total_new_amount,
            net_amount,
            outcome: SettlementOutcome::classify(net_amount),
        })
    }

    /// Validates each line and sums the rounded line totals.
    fn sum_lines(lines: &[ReturnLine]) -> Result<Decimal, SettlementError> {
        let mut total = Decimal::ZERO;
        for line in lines {
            Self::validate_line(line)?;
            total += line.line_total();
        }
        Ok(total)
    }

    fn validate_line(line: &ReturnLine) -> Result<(), SettlementError> {
        if line.quantity == 0 {
            return Err(SettlementError::InvalidQuantity {
                product_id: line.product_id,
            });
        }
        if line.unit_price.is_sign_negative() {
            return Err(SettlementError::InvalidUnitPrice {
                product_id: line.product_id,
                unit_price: line.unit_price,
            });
        }
        Ok(())
    }
}
