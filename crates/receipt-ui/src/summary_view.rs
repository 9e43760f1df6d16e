//! The closing "Summary Statistics" block.

use receipt_core::formatting::format_currency;
use receipt_core::stats::{Metric, SummaryStats};
use unicode_width::UnicodeWidthStr;

use crate::components::Header;
use crate::themes::Theme;

pub const SUMMARY_TITLE: &str = "📊 Summary Statistics";

const LABEL_WIDTH: usize = 26;

/// `"16.7%"`, or `"n/a"` when the denominator was zero.
fn percent(metric: &Metric) -> String {
    match metric {
        Metric::Formatted(value) => format!("{value}%"),
        Metric::Unavailable => "n/a".to_string(),
    }
}

/// `"$200.00"`, or `"n/a"`.
fn dollars(metric: &Metric) -> String {
    match metric {
        Metric::Formatted(value) => format!("${value}"),
        Metric::Unavailable => "n/a".to_string(),
    }
}

fn line(label: &str, value: &str, theme: &Theme) -> String {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    format!(
        "{}{}{}",
        theme.paint(theme.label, label),
        " ".repeat(pad),
        theme.paint(theme.value, value)
    )
}

/// Render the summary block: heading, separator and one line per figure.
pub fn render_summary(stats: &SummaryStats, theme: &Theme) -> String {
    let most_expensive = match &stats.most_expensive_year {
        Some(year) => format!(
            "{} ({}, {} receipts, {} of expenses)",
            year,
            format_currency(stats.most_expensive_year_amount),
            stats.most_expensive_year_receipts,
            percent(&stats.expense_percentage),
        ),
        None => "n/a".to_string(),
    };

    let mut lines = vec![Header::new(SUMMARY_TITLE, theme).render()];
    lines.push(line(
        "Total Receipts Processed:",
        &format!(
            "{} ({} valid, {} invalid, {})",
            stats.total_files,
            stats.total_valid_files,
            stats.total_invalid_files,
            percent(&stats.invalid_file_percentage),
        ),
        theme,
    ));
    lines.push(line("Total Expenses:", &format_currency(stats.total_expenses), theme));
    lines.push(line(
        "Total Reimbursements:",
        &format!(
            "{} ({})",
            format_currency(stats.total_reimbursements),
            percent(&stats.reimbursement_rate)
        ),
        theme,
    ));
    lines.push(line(
        "Awaiting Reimbursement:",
        &format!(
            "{} ({})",
            format_currency(stats.total_reimburseable),
            percent(&stats.reimburseable_rate)
        ),
        theme,
    ));
    lines.push(line(
        "Average per Year:",
        &format!(
            "{} ({} receipts)",
            dollars(&stats.avg_expense_per_year),
            stats.avg_receipts_per_year
        ),
        theme,
    ));
    lines.push(line("Most Expensive Year:", &most_expensive, theme));

    lines.join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
