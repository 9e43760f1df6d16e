//! Per-year aggregation of classified receipts.

use std::collections::BTreeMap;

use receipt_core::classifier::classify;
use receipt_core::formatting::round_to;
use receipt_core::models::{Classification, ParsedEntry, RejectedEntry};
use receipt_core::stats::{calculate_summary_stats, SummaryStats};
use serde::Serialize;

// ── YearAccumulator ───────────────────────────────────────────────────────────

/// Running totals for one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearAccumulator {
    /// Sum of every valid amount, re-rounded to cents after each addition.
    pub expenses: f64,
    /// Sum of reimbursed amounts only, same rounding. Always a subset of
    /// `expenses`.
    pub reimbursements: f64,
    /// Number of valid receipts, reimbursed or not.
    pub receipt_count: u32,
}

impl YearAccumulator {
    /// Add a single receipt to the running totals.
    pub fn add_entry(&mut self, entry: &ParsedEntry) {
        self.expenses = round_to(self.expenses + entry.amount, 2);
        if entry.is_reimbursement {
            self.reimbursements = round_to(self.reimbursements + entry.amount, 2);
        }
        self.receipt_count += 1;
    }
}

// ── AggregationResult ─────────────────────────────────────────────────────────

/// Everything one scan produced: per-year totals plus the rejected files in
/// the order they were encountered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    years: BTreeMap<String, YearAccumulator>,
    invalid_entries: Vec<RejectedEntry>,
}

impl AggregationResult {
    /// Year keys in ascending order.
    pub fn years(&self) -> Vec<String> {
        self.years.keys().cloned().collect()
    }

    /// Totals for a single year.
    pub fn year(&self, year: &str) -> Option<&YearAccumulator> {
        self.years.get(year)
    }

    /// Rejected files in scan order.
    pub fn invalid_entries(&self) -> &[RejectedEntry] {
        &self.invalid_entries
    }

    /// `true` when no year received a single valid receipt.
    pub fn has_no_valid_data(&self) -> bool {
        self.years.is_empty()
    }

    pub fn expenses_by_year(&self) -> BTreeMap<String, f64> {
        self.project(|acc| acc.expenses)
    }

    pub fn reimbursements_by_year(&self) -> BTreeMap<String, f64> {
        self.project(|acc| acc.reimbursements)
    }

    pub fn receipt_counts(&self) -> BTreeMap<String, u32> {
        self.project(|acc| acc.receipt_count)
    }

    /// Run the statistics engine over this result.
    pub fn summary_stats(&self) -> SummaryStats {
        calculate_summary_stats(
            &self.years(),
            &self.expenses_by_year(),
            &self.reimbursements_by_year(),
            &self.receipt_counts(),
            &self.invalid_entries,
        )
    }

    fn project<T>(&self, f: impl Fn(&YearAccumulator) -> T) -> BTreeMap<String, T> {
        self.years
            .iter()
            .map(|(year, acc)| (year.clone(), f(acc)))
            .collect()
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────────

/// What happened to one directory entry during the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    /// Dot-file; never classified.
    Hidden,
    /// Valid receipt added to its year.
    Counted,
    /// Valid name with a `$0.00` amount; ignored.
    ZeroAmount,
    /// Name broke a naming rule; recorded as invalid.
    Rejected,
}

/// `true` for names following the dot-file convention.
pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// Mutable fold state used while a directory is being scanned.
#[derive(Debug, Default)]
pub struct Aggregator {
    result: AggregationResult,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an in-memory list of names, in order.
    pub fn from_file_names<I, S>(names: I) -> AggregationResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = Self::new();
        for name in names {
            aggregator.add_file_name(name.as_ref());
        }
        aggregator.finish()
    }

    /// Classify `file_name` and fold it into the running totals.
    pub fn add_file_name(&mut self, file_name: &str) -> FoldOutcome {
        if is_hidden(file_name) {
            return FoldOutcome::Hidden;
        }

        match classify(file_name) {
            Classification::Rejected(rejected) => {
                self.result.invalid_entries.push(rejected);
                FoldOutcome::Rejected
            }
            Classification::Valid(entry) if entry.amount > 0.0 => {
                self.result
                    .years
                    .entry(entry.year.clone())
                    .or_default()
                    .add_entry(&entry);
                FoldOutcome::Counted
            }
            Classification::Valid(_) => FoldOutcome::ZeroAmount,
        }
    }

    /// Freeze the totals.
    pub fn finish(self) -> AggregationResult {
        self.result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
