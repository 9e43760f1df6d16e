//! Summary statistics over the aggregated receipts.
//!
//! Every rate, share and average is a [`Metric`]: a string formatted to a fixed
//! precision, or [`Metric::Unavailable`] when its denominator is zero.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::formatting::{percentage, to_fixed};
use crate::models::RejectedEntry;

// ── Metric ────────────────────────────────────────────────────────────────────

/// A derived figure that may not exist for an empty data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metric {
    /// Value formatted to the metric's fixed precision, e.g. `"16.7"`.
    Formatted(String),
    /// The denominator was zero.
    Unavailable,
}

impl Metric {
    /// `part / whole * 100` with one decimal place.
    pub fn percent(part: f64, whole: f64) -> Self {
        percentage(part, whole)
            .map(|p| Metric::Formatted(to_fixed(p, 1)))
            .unwrap_or(Metric::Unavailable)
    }

    /// `total / count` with two decimal places.
    pub fn average(total: f64, count: usize) -> Self {
        if count == 0 {
            return Metric::Unavailable;
        }
        Metric::Formatted(to_fixed(total / count as f64, 2))
    }

}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Formatted(s) => f.write_str(s),
            Metric::Unavailable => f.write_str("n/a"),
        }
    }
}

/// Serialises as the formatted string, or as the number `0` when unavailable.
impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Formatted(text) => s.serialize_str(text),
            Metric::Unavailable => s.serialize_u8(0),
        }
    }
}

// ── SummaryStats ──────────────────────────────────────────────────────────────

/// Read-only snapshot of the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_files: usize,
    pub total_valid_files: u32,
    pub total_invalid_files: usize,
    pub invalid_file_percentage: Metric,
    pub total_expenses: f64,
    pub total_reimbursements: f64,
    /// Expenses not yet reimbursed.
    pub total_reimburseable: f64,
    pub reimbursement_rate: Metric,
    pub reimburseable_rate: Metric,
    pub avg_expense_per_year: Metric,
    /// Valid receipts per year, rounded half away from zero; 0 without years.
    pub avg_receipts_per_year: u32,
    pub most_expensive_year: Option<String>,
    pub most_expensive_year_amount: f64,
    pub most_expensive_year_receipts: u32,
    /// Share of total expenses spent in the most expensive year.
    pub expense_percentage: Metric,
    /// Share of valid receipts filed in the most expensive year.
    pub receipt_percentage: Metric,
}

/// Derive the summary statistics.
///
/// `years` must be in ascending order; the earliest year wins a tie for most
/// expensive. Years missing from a map count as zero.
pub fn calculate_summary_stats(
    years: &[String],
    expenses_by_year: &BTreeMap<String, f64>,
    reimbursements_by_year: &BTreeMap<String, f64>,
    receipt_counts: &BTreeMap<String, u32>,
    invalid_entries: &[RejectedEntry],
) -> SummaryStats {
    let expenses = |year: &str| expenses_by_year.get(year).copied().unwrap_or(0.0);
    let reimbursements = |year: &str| reimbursements_by_year.get(year).copied().unwrap_or(0.0);
    let receipts = |year: &str| receipt_counts.get(year).copied().unwrap_or(0);

    let total_valid_files: u32 = years.iter().map(|y| receipts(y)).sum();
    let total_invalid_files = invalid_entries.len();
    let total_files = total_valid_files as usize + total_invalid_files;

    let total_expenses: f64 = years.iter().map(|y| expenses(y)).sum();
    let total_reimbursements: f64 = years.iter().map(|y| reimbursements(y)).sum();
    let total_reimburseable = total_expenses - total_reimbursements;

    let year_count = years.len();
    let avg_receipts_per_year = if year_count == 0 {
        0
    } else {
        (total_valid_files as f64 / year_count as f64).round() as u32
    };

    // Strict `>` keeps the earliest year on ties.
    let most_expensive_year = years
        .iter()
        .skip(1)
        .fold(years.first(), |max, year| match max {
            Some(current) if expenses(year) > expenses(current) => Some(year),
            other => other,
        })
        .cloned();

    let (most_expensive_year_amount, most_expensive_year_receipts) = most_expensive_year
        .as_deref()
        .map(|y| (expenses(y), receipts(y)))
        .unwrap_or((0.0, 0));

    SummaryStats {
        total_files,
        total_valid_files,
        total_invalid_files,
        invalid_file_percentage: Metric::percent(total_invalid_files as f64, total_files as f64),
        total_expenses,
        total_reimbursements,
        total_reimburseable,
        reimbursement_rate: Metric::percent(total_reimbursements, total_expenses),
        reimburseable_rate: Metric::percent(total_reimburseable, total_expenses),
        avg_expense_per_year: Metric::average(total_expenses, year_count),
        avg_receipts_per_year,
        most_expensive_year,
        most_expensive_year_amount,
        most_expensive_year_receipts,
        expense_percentage: Metric::percent(most_expensive_year_amount, total_expenses),
        receipt_percentage: Metric::percent(
            most_expensive_year_receipts as f64,
            total_valid_files as f64,
        ),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
