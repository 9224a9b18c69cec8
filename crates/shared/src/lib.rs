//! Shared types and errors for Kasbook.
//!
//! This crate provides common types used across all other crates:
//! - Decimal amount utilities (strict parsing, display rounding)
//! - Typed IDs for type-safe entity references
//! - Generic table state (sort + pagination) for list views
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
