//! Reusable text components shared by the report views.

pub mod bar_chart;
pub mod header;

pub use bar_chart::{BarChart, ComparisonChart, CHART_WIDTH};
pub use header::Header;
