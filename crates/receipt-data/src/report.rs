//! Presentation-ready tables and chart series built from per-year totals.

use std::collections::BTreeMap;

use receipt_core::formatting::format_currency;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Key of the synthetic row summing every year.
pub const TOTAL_KEY: &str = "Total";

// ── YearlyTable ───────────────────────────────────────────────────────────────

/// One row of the yearly report, amounts already formatted as `$x.xx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyRow {
    pub expenses: String,
    pub reimbursements: String,
    pub receipts: u32,
}

/// Rows keyed by year in ascending order, followed by the `"Total"` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyTable {
    rows: Vec<(String, YearlyRow)>,
}

impl YearlyTable {
    /// Look up a row by year or by [`TOTAL_KEY`].
    pub fn get(&self, key: &str) -> Option<&YearlyRow> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, row)| row)
    }

    /// The `"Total"` row. Always present.
    pub fn total(&self) -> Option<&YearlyRow> {
        self.get(TOTAL_KEY)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &YearlyRow)> {
        self.rows.iter().map(|(k, row)| (k.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Serialises as a JSON object whose key order matches the table order.
impl Serialize for YearlyTable {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.rows.len()))?;
        for (key, row) in &self.rows {
            map.serialize_entry(key, row)?;
        }
        map.end()
    }
}

/// Build the yearly table plus a trailing `"Total"` row.
///
/// Years missing from a map count as zero. The total is the plain sum of the
/// per-year values, formatted once at the end.
pub fn build_yearly_table(
    years: &[String],
    expenses_by_year: &BTreeMap<String, f64>,
    reimbursements_by_year: &BTreeMap<String, f64>,
    receipt_counts: &BTreeMap<String, u32>,
) -> YearlyTable {
    let mut rows = Vec::with_capacity(years.len() + 1);
    let mut total_expenses = 0.0;
    let mut total_reimbursements = 0.0;
    let mut total_receipts = 0u32;

    for year in years {
        let expenses = expenses_by_year.get(year).copied().unwrap_or(0.0);
        let reimbursements = reimbursements_by_year.get(year).copied().unwrap_or(0.0);
        let receipts = receipt_counts.get(year).copied().unwrap_or(0);

        total_expenses += expenses;
        total_reimbursements += reimbursements;
        total_receipts += receipts;

        rows.push((
            year.clone(),
            YearlyRow {
                expenses: format_currency(expenses),
                reimbursements: format_currency(reimbursements),
                receipts,
            },
        ));
    }

    rows.push((
        TOTAL_KEY.to_string(),
        YearlyRow {
            expenses: format_currency(total_expenses),
            reimbursements: format_currency(total_reimbursements),
            receipts: total_receipts,
        },
    ));

    YearlyTable { rows }
}

// ── Chart data ────────────────────────────────────────────────────────────────

/// A labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Series for the per-year expense and reimbursement charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub expense_data: Vec<ChartPoint>,
    pub reimbursement_data: Vec<ChartPoint>,
}

impl ChartData {
    /// Largest value across both series, or `0.0` when empty.
    pub fn max_value(&self) -> f64 {
        self.expense_data
            .iter()
            .chain(&self.reimbursement_data)
            .map(|p| p.value)
            .fold(0.0, f64::max)
    }
}

/// One point per year for each series; missing years default to zero.
pub fn prepare_chart_data(
    years: &[String],
    expenses_by_year: &BTreeMap<String, f64>,
    reimbursements_by_year: &BTreeMap<String, f64>,
) -> ChartData {
    let series = |map: &BTreeMap<String, f64>| -> Vec<ChartPoint> {
        years
            .iter()
            .map(|year| ChartPoint {
                label: year.clone(),
                value: map.get(year).copied().unwrap_or(0.0),
            })
            .collect()
    };

    ChartData {
        expense_data: series(expenses_by_year),
        reimbursement_data: series(reimbursements_by_year),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
