//! Decimal amount utilities.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` with 2-digit display precision.
//! Rounding happens only at formatting/line boundaries, never mid-computation.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Maximum fractional digits an amount may carry.
pub const AMOUNT_SCALE: u32 = 2;

/// Errors from strict amount parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountParseError {
    /// The input was empty or whitespace-only.
    #[error("Amount is empty")]
    Empty,

    /// The input was not a valid decimal number.
    #[error("Not a valid decimal amount: {0:?}")]
    Invalid(String),

    /// The input carried more than 2 fractional digits.
    #[error("Amount {0:?} has more than {AMOUNT_SCALE} decimal places")]
    TooPrecise(String),
}

/// Strictly parses a string-encoded decimal amount.
///
/// API payloads deliver amounts as strings; this is the single normalization
/// point. Ambiguous input is rejected, never coerced:
/// - empty or whitespace-only strings
/// - non-numeric text (including scientific notation)
/// - more than 2 significant fractional digits (trailing zeros are fine)
///
/// Sign is preserved; range checks (e.g. non-negative) are domain rules and
/// live with the callers.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let amount = Decimal::from_str_exact(trimmed)
        .map_err(|_| AmountParseError::Invalid(input.to_string()))?;

    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(AmountParseError::TooPrecise(input.to_string()));
    }

    Ok(amount)
}

/// Rounds an amount to 2 decimal places for display and line totals.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven)
}
