//! Return and exchange domain types.

use kasbook_shared::types::amount::round_display;
use kasbook_shared::types::{OrderId, OrderReturnId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction is a pure return or an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    /// Items come back, nothing is taken in exchange.
    Return,
    /// Items come back and new items are taken in their place.
    Exchange,
}

/// One line of a return or exchange: a product and how many units at what
/// unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnLine {
    /// The product being returned or taken.
    pub product_id: ProductId,
    /// Number of units; must be positive.
    pub quantity: u32,
    /// Price per unit; must be non-negative.
    pub unit_price: Decimal,
}

impl ReturnLine {
    /// The line subtotal: `quantity * unit_price`, rounded to 2 decimal
    /// places at the line level (matching the per-item subtotal shown on
    /// the receipt).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        round_display(Decimal::from(self.quantity) * self.unit_price)
    }
}

/// How a settlement resolves, classified from the sign of the net amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettlementOutcome {
    /// Store owes the customer `amount` (net < 0).
    Refund {
        /// Magnitude owed to the customer; always positive.
        amount: Decimal,
    },
    /// Customer owes the store `amount` (net > 0).
    AdditionalPayment {
        /// Magnitude owed by the customer; always positive.
        amount: Decimal,
    },
    /// Totals match exactly; no payment in either direction (net == 0).
    EvenExchange,
}

impl SettlementOutcome {
    /// Classifies a signed net amount. The three cases are mutually
    /// exclusive and exhaustive.
    #[must_use]
    pub fn classify(net_amount: Decimal) -> Self {
        if net_amount.is_sign_negative() && !net_amount.is_zero() {
            Self::Refund {
                amount: net_amount.abs(),
            }
        } else if net_amount.is_zero() {
            Self::EvenExchange
        } else {
            Self::AdditionalPayment { amount: net_amount }
        }
    }
}

/// The computed settlement for one return/exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Sum of returned-item line totals.
    pub total_return_amount: Decimal,
    /// Sum of new-item line totals (zero for a pure return).
    pub total_new_amount: Decimal,
    /// `total_new_amount - total_return_amount`, signed.
    pub net_amount: Decimal,
    /// Classification of `net_amount`.
    pub outcome: SettlementOutcome,
}

/// One processed return/exchange transaction.
///
/// Created atomically from a draft; the derived monetary fields always
/// satisfy `net_amount == total_new_amount - total_return_amount`.
/// Read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReturn {
    /// The return ID.
    pub id: OrderReturnId,
    /// The original order being (partially) reversed.
    pub order_id: OrderId,
    /// Pure return or exchange.
    pub return_type: ReturnType,
    /// Items being given back.
    pub return_items: Vec<ReturnLine>,
    /// Items taken in exchange (empty for pure returns).
    pub new_items: Vec<ReturnLine>,
    /// Sum of returned-item line totals.
    pub total_return_amount: Decimal,
    /// Sum of new-item line totals.
    pub total_new_amount: Decimal,
    /// Signed settlement amount.
    pub net_amount: Decimal,
    /// Settlement classification.
    pub outcome: SettlementOutcome,
    /// Operational metadata; not computed.
    pub payment_method: String,
    /// Operational metadata; not computed.
    pub payment_status: String,
}
