//! Text tables: the rejected-file warning and the per-year report.

use receipt_core::models::RejectedEntry;
use receipt_data::report::{YearlyRow, YearlyTable, TOTAL_KEY};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

pub const WARNING_HEADING: &str =
    "⚠️  WARNING: The following files do not match the expected pattern:";
pub const EXPECTED_PATTERN: &str =
    "Expected pattern: <yyyy-mm-dd> - <description> - $<amount>.<ext>";

const FILENAME_HEADER: &str = "Filename";
const ERROR_HEADER: &str = "Error";
const COLUMN_GAP: usize = 2;

/// Width of the label column in the yearly table, colon included.
const FIELD_LABEL_WIDTH: usize = 16;

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

// ── Invalid files ─────────────────────────────────────────────────────────────

/// Render the warning block listing every rejected file and its diagnostic.
///
/// Returns an empty string when `entries` is empty.
pub fn render_invalid_files(entries: &[RejectedEntry], theme: &Theme) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let name_width = entries
        .iter()
        .map(|e| e.file_name.width())
        .chain(std::iter::once(FILENAME_HEADER.width()))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;
    let error_width = entries
        .iter()
        .map(|e| e.message().width())
        .chain(std::iter::once(ERROR_HEADER.width()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        theme.warning(WARNING_HEADING),
        theme.dim(EXPECTED_PATTERN),
        String::new(),
        theme.paint(
            theme.label,
            &format!("{}{}", pad_right(FILENAME_HEADER, name_width), ERROR_HEADER),
        ),
        theme.paint(theme.separator, &"-".repeat(name_width + error_width)),
    ];

    for entry in entries {
        lines.push(format!(
            "{}{}",
            pad_right(&entry.file_name, name_width),
            theme.error(&entry.message()),
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

// ── Yearly table ──────────────────────────────────────────────────────────────

fn render_field(label: &str, value: &str, theme: &Theme) -> String {
    format!(
        "  {}{}",
        theme.paint(theme.label, &pad_right(&format!("{label}:"), FIELD_LABEL_WIDTH)),
        theme.paint(theme.value, value),
    )
}

fn render_row(key: &str, row: &YearlyRow, theme: &Theme) -> Vec<String> {
    let key_style = if key == TOTAL_KEY {
        theme.table_total
    } else {
        theme.table_key
    };
    vec![
        theme.paint(key_style, &format!("{key}:")),
        render_field("expenses", &row.expenses, theme),
        render_field("reimbursements", &row.reimbursements, theme),
        render_field("receipts", &row.receipts.to_string(), theme),
    ]
}

/// Render the yearly table as an indented key/value listing:
///
/// ```text
/// 2021:
///   expenses:       $100.50
///   reimbursements: $50.25
///   receipts:       2
/// Total:
///   ...
/// ```
pub fn render_yearly_table(table: &YearlyTable, theme: &Theme) -> String {
    table
        .iter()
        .flat_map(|(key, row)| render_row(key, row, theme))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
