//! Top-level report rendering.
//!
//! Assembles the invalid-file warning, yearly table, charts and summary into
//! the text the binary prints, or serialises the report as JSON.

use receipt_core::error::Result;
use receipt_data::analysis::AnalysisReport;

use crate::components::{BarChart, ComparisonChart};
use crate::summary_view::render_summary;
use crate::table_view::{render_invalid_files, render_yearly_table};
use crate::themes::Theme;

pub const EXPENSES_CHART_TITLE: &str = "Expenses by year";
pub const REIMBURSEMENTS_CHART_TITLE: &str = "Reimbursements by year";
pub const COMPARISON_CHART_TITLE: &str = "Expenses vs Reimbursements by year";

/// Output switches taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Skip the yearly table and charts.
    pub summary_only: bool,
}

/// Render the full text report.
///
/// Sections are separated by a blank line, in this order: rejected-file
/// warning (only when there are rejects), yearly table, the three charts,
/// summary.
pub fn render_report(report: &AnalysisReport, options: &RenderOptions, theme: &Theme) -> String {
    let mut sections = Vec::new();

    let invalid = render_invalid_files(&report.invalid_files, theme);
    if !invalid.is_empty() {
        sections.push(invalid);
    }

    if !options.summary_only {
        sections.push(render_yearly_table(&report.table, theme));
        sections.push(
            BarChart::new(EXPENSES_CHART_TITLE, &report.chart.expense_data, theme).render(),
        );
        sections.push(
            BarChart::new(
                REIMBURSEMENTS_CHART_TITLE,
                &report.chart.reimbursement_data,
                theme,
            )
            .render(),
        );
        sections.push(
            ComparisonChart::new(COMPARISON_CHART_TITLE, &report.chart, theme).render(),
        );
    }

    sections.push(render_summary(&report.summary, theme));
    sections.join("\n\n")
}

/// Pretty-printed JSON document of the report.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
