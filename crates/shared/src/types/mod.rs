//! Common types used across the application.

pub mod amount;
pub mod id;
pub mod table;

pub use amount::{parse_amount, round_display};
pub use id::*;
pub use table::{PageRequest, PageResponse, SortDirection, SortKey, TableState};
