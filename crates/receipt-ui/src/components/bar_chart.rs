use receipt_core::formatting::format_currency;
use receipt_data::report::{ChartData, ChartPoint};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// Bar width in terminal columns.
pub const CHART_WIDTH: usize = 20;

const FILLED: char = '\u{2588}'; // █  FULL BLOCK
const EMPTY: char = '\u{2591}'; // ░  LIGHT SHADE
const AXIS: char = '\u{2562}'; // ╢
const CORNER: char = '\u{255A}'; // ╚
const BASELINE: char = '\u{2550}'; // ═

/// Number of filled columns for `value` on a scale topping out at `max`.
///
/// Floors to whole columns; a zero or negative `max` draws nothing.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    (((value / max) * width as f64).floor() as usize).min(width)
}

fn bar(value: f64, max: f64, width: usize) -> (String, String) {
    let filled = bar_length(value, max, width);
    (
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(width - filled),
    )
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

// ── BarChart ─────────────────────────────────────────────────────────────────

/// Horizontal bar chart of one series, scaled to its own maximum, with a
/// `$x.xx` label after every bar.
pub struct BarChart<'a> {
    pub title: &'a str,
    pub points: &'a [ChartPoint],
    pub width: usize,
    pub theme: &'a Theme,
}

impl<'a> BarChart<'a> {
    pub fn new(title: &'a str, points: &'a [ChartPoint], theme: &'a Theme) -> Self {
        Self {
            title,
            points,
            width: CHART_WIDTH,
            theme,
        }
    }

    pub fn render(&self) -> String {
        let max = self.points.iter().map(|p| p.value).fold(0.0, f64::max);
        let label_width = self.points.iter().map(|p| p.label.width()).max().unwrap_or(0);

        let mut lines = vec![self.theme.header(self.title)];
        for point in self.points {
            let (filled, empty) = bar(point.value, max, self.width);
            lines.push(format!(
                "{} {}{}{} {}",
                pad_right(&point.label, label_width),
                self.theme.paint(self.theme.axis, &AXIS.to_string()),
                self.theme.paint(self.theme.bar_expense, &filled),
                self.theme.dim(&empty),
                format_currency(point.value),
            ));
        }
        lines.push(baseline(label_width + 1, self.width, self.theme));
        lines.join("\n")
    }
}

// ── ComparisonChart ──────────────────────────────────────────────────────────

/// Expenses and reimbursements side by side per year, both scaled to the
/// largest value across the two series.
pub struct ComparisonChart<'a> {
    pub title: &'a str,
    pub chart: &'a ChartData,
    pub width: usize,
    pub theme: &'a Theme,
}

impl<'a> ComparisonChart<'a> {
    pub fn new(title: &'a str, chart: &'a ChartData, theme: &'a Theme) -> Self {
        Self {
            title,
            chart,
            width: CHART_WIDTH,
            theme,
        }
    }

    pub fn render(&self) -> String {
        let max = self.chart.max_value();

        let rows: Vec<(String, f64, bool)> = self
            .chart
            .expense_data
            .iter()
            .zip(&self.chart.reimbursement_data)
            .flat_map(|(exp, rei)| {
                [
                    (format!("{} Expenses", exp.label), exp.value, false),
                    (format!("{} Reimbursements", rei.label), rei.value, true),
                ]
            })
            .collect();
        let label_width = rows.iter().map(|(l, _, _)| l.width()).max().unwrap_or(0);

        let mut lines = vec![self.theme.header(self.title)];
        for (label, value, is_reimbursement) in &rows {
            let (filled, empty) = bar(*value, max, self.width);
            let style = if *is_reimbursement {
                self.theme.bar_reimbursement
            } else {
                self.theme.bar_expense
            };
            lines.push(format!(
                "{} {}{}{} {}",
                pad_right(label, label_width),
                self.theme.paint(self.theme.axis, &AXIS.to_string()),
                self.theme.paint(style, &filled),
                self.theme.dim(&empty),
                format_currency(*value),
            ));
        }
        lines.push(baseline(label_width + 1, self.width, self.theme));
        lines.join("\n")
    }
}

fn baseline(indent: usize, width: usize, theme: &Theme) -> String {
    let line = format!("{}{}", CORNER, BASELINE.to_string().repeat(width));
    format!("{}{}", " ".repeat(indent), theme.paint(theme.axis, &line))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
