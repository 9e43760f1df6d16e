//! Data layer for the HSA expense analyzer.
//!
//! Lists a receipts directory, classifies each filename, folds the valid
//! receipts into per-year totals and runs the analysis pipeline that builds
//! the yearly table, chart series and summary statistics.

pub mod aggregator;
pub mod analysis;
pub mod report;
pub mod scanner;

pub use receipt_core as core;
