//! Order return and exchange settlement computation.
//!
//! This module implements the return slice of the order system:
//! - Return/exchange line items and the order-return record
//! - Net settlement computation (refund vs. additional payment vs. even)
//! - Draft types for the strict API-boundary parse step
//! - Error types for settlement operations

pub mod error;
pub mod input;
pub mod settlement;
pub mod types;

#[cfg(test)]
mod settlement_props;

pub use error::SettlementError;
pub use input::{OrderReturnDraft, ReturnLineDraft};
pub use settlement::SettlementService;
pub use types::{OrderReturn, ReturnLine, ReturnType, Settlement, SettlementOutcome};
