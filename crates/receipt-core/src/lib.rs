//! Core domain types for the HSA expense analyzer.
//!
//! Holds the receipt filename classifier, the shared error types, currency
//! and percentage formatting helpers, and the summary-statistics engine.
//! Nothing in this crate touches the filesystem.

pub mod classifier;
pub mod error;
pub mod formatting;
pub mod models;
pub mod stats;

pub use error::{ReceiptError, Result, ValidationError};
