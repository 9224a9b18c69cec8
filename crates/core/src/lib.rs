//! Core business logic for Kasbook.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `ledger` - Journal entries and running balance computation
//! - `returns` - Order return/exchange settlement computation

pub mod ledger;
pub mod returns;
