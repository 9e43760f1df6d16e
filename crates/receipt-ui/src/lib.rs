//! Terminal report layer for the HSA expense analyzer.
//!
//! Provides the colour theme, bar charts, the invalid-file and yearly tables,
//! the summary block and the top-level report renderer. Every renderer
//! returns a `String`; printing is left to the binary.

pub mod app;
pub mod components;
pub mod summary_view;
pub mod table_view;
pub mod themes;
