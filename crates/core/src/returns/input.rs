//! Draft types for the API-boundary parse step.
//!
//! Return payloads carry unit prices as strings. Drafts deserialize that
//! shape and convert into the validated [`OrderReturn`] record through the
//! strict amount parse plus the settlement engine.

use kasbook_shared::types::amount::parse_amount;
use kasbook_shared::types::{OrderId, OrderReturnId, ProductId};
use serde::Deserialize;

use super::error::SettlementError;
use super::settlement::SettlementService;
use super::types::{OrderReturn, ReturnLine, ReturnType};

/// Unvalidated return line as submitted by the return form.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnLineDraft {
    /// The product on this line.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: u32,
    /// String-encoded price per unit.
    pub unit_price: String,
}

impl ReturnLineDraft {
    fn into_line(self) -> Result<ReturnLine, SettlementError> {
        let unit_price = parse_amount(&self.unit_price).map_err(|source| {
            SettlementError::InvalidAmount {
                product_id: self.product_id,
                source,
            }
        })?;
        Ok(ReturnLine {
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price,
        })
    }
}

/// Unvalidated order return as submitted when a return is processed.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderReturnDraft {
    /// The original order.
    pub order_id: OrderId,
    /// Pure return or exchange.
    pub return_type: ReturnType,
    /// Items coming back.
    pub return_items: Vec<ReturnLineDraft>,
    /// Items taken in exchange; absent means none.
    #[serde(default)]
    pub new_items: Vec<ReturnLineDraft>,
    /// Operational metadata, stored as-is.
    pub payment_method: String,
    /// Operational metadata, stored as-is.
    pub payment_status: String,
}

impl OrderReturnDraft {
    /// Parses, settles, and materializes the full [`OrderReturn`] record
    /// with a fresh ID and all derived monetary fields.
    ///
    /// The record invariant
    /// `net_amount == total_new_amount - total_return_amount` holds by
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for unparseable unit prices, or any
    /// settlement error (empty return, exchange without new items, bad
    /// line constraints).
    pub fn into_return(self) -> Result<OrderReturn, SettlementError> {
        let return_items: Vec<ReturnLine> = self
            .return_items
            .into_iter()
            .map(ReturnLineDraft::into_line)
            .collect::<Result<_, _>>()?;
        let new_items: Vec<ReturnLine> = self
            .new_items
            .into_iter()
            .map(ReturnLineDraft::into_line)
            .collect::<Result<_, _>>()?;

        let settlement =
            SettlementService::settle(self.return_type, &return_items, &new_items)?;

        Ok(OrderReturn {
            id: OrderReturnId::new(),
            order_id: self.order_id,
            return_type: self.return_type,
            return_items,
            new_items,
            total_return_amount: settlement.total_return_amount,
            total_new_amount: settlement.total_new_amount,
            net_amount: settlement.net_amount,
            outcome: settlement.outcome,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
        })
    }
}
