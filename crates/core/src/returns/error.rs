//! Settlement error types.

use kasbook_shared::error::AppError;
use kasbook_shared::types::amount::AmountParseError;
use kasbook_shared::types::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while settling a return or exchange.
///
/// All are local validation failures detected at the engine boundary;
/// nothing here is transient or retryable.
#[derive(Debug, Error)]
pub enum SettlementError {
    /// A return must return at least one item.
    #[error("A return must contain at least one returned item")]
    EmptyReturn,

    /// An exchange must take at least one new item.
    #[error("An exchange must include at least one new item")]
    MissingExchangeItems,

    /// Line quantity must be positive.
    #[error("Line for product {product_id} has zero quantity")]
    InvalidQuantity {
        /// The product on the offending line.
        product_id: ProductId,
    },

    /// Line unit price must be non-negative.
    #[error("Line for product {product_id} has negative unit price {unit_price}")]
    InvalidUnitPrice {
        /// The product on the offending line.
        product_id: ProductId,
        /// The rejected unit price.
        unit_price: Decimal,
    },

    /// A string-encoded unit price failed the strict parse step.
    #[error("Invalid unit price for product {product_id}: {source}")]
    InvalidAmount {
        /// The product on the offending line.
        product_id: ProductId,
        /// The underlying parse failure.
        source: AmountParseError,
    },
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyReturn => "EMPTY_RETURN",
            Self::MissingExchangeItems => "MISSING_EXCHANGE_ITEMS",
            Self::InvalidQuantity { .. } => "INVALID_QUANTITY",
            Self::InvalidUnitPrice { .. } => "INVALID_UNIT_PRICE",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
        }
    }
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        Self::Validation(err.to_string())
    }
}
