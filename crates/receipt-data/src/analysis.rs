//! Main analysis pipeline.
//!
//! Scans a receipts directory once and derives everything the renderers need:
//! the yearly table, chart series, rejected files and summary statistics.

use std::path::{Path, PathBuf};

use chrono::Utc;
use receipt_core::error::Result;
use receipt_core::models::RejectedEntry;
use receipt_core::stats::SummaryStats;
use serde::Serialize;

use crate::aggregator::AggregationResult;
use crate::report::{build_yearly_table, prepare_chart_data, ChartData, YearlyTable};
use crate::scanner::aggregate;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Directory that was scanned.
    pub directory: PathBuf,
    /// Number of years with at least one valid receipt.
    pub years_found: usize,
    /// Wall-clock seconds spent listing and classifying the directory.
    pub scan_time_seconds: f64,
}

/// The complete output of [`analyze_receipts`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metadata: AnalysisMetadata,
    /// Per-year rows plus the `"Total"` row.
    pub table: YearlyTable,
    /// Rejected files in scan order.
    pub invalid_files: Vec<RejectedEntry>,
    pub summary: SummaryStats,
    #[serde(skip)]
    pub chart: ChartData,
}

impl AnalysisReport {
    /// Derive the report from an already aggregated scan.
    pub fn from_aggregation(
        result: &AggregationResult,
        directory: &Path,
        scan_time_seconds: f64,
    ) -> Self {
        let years = result.years();
        let expenses = result.expenses_by_year();
        let reimbursements = result.reimbursements_by_year();

        let table = build_yearly_table(&years, &expenses, &reimbursements, &result.receipt_counts());
        let chart = prepare_chart_data(&years, &expenses, &reimbursements);

        AnalysisReport {
            metadata: AnalysisMetadata {
                generated_at: Utc::now().to_rfc3339(),
                directory: directory.to_path_buf(),
                years_found: years.len(),
                scan_time_seconds,
            },
            table,
            invalid_files: result.invalid_entries().to_vec(),
            summary: result.summary_stats(),
            chart,
        }
    }

    /// `true` when the scan found no valid receipt at all.
    pub fn has_no_valid_data(&self) -> bool {
        self.metadata.years_found == 0
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline over `dir_path`.
///
/// 1. List and classify the directory via [`aggregate`].
/// 2. Build the yearly table and chart series.
/// 3. Compute the summary statistics.
///
/// Fails only when the directory cannot be listed. A directory without valid
/// receipts still produces a report.
pub fn analyze_receipts(dir_path: &Path) -> Result<AnalysisReport> {
    let scan_start = std::time::Instant::now();
    let result = aggregate(dir_path)?;
    let scan_time = scan_start.elapsed().as_secs_f64();

    Ok(AnalysisReport::from_aggregation(&result, dir_path, scan_time))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Aggregator;
    use receipt_core::stats::Metric;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    // ── analyze_receipts ──────────────────────────────────────────────────────

    #[test]
    fn test_analyze_receipts_empty_directory() {
        let dir = TempDir::new().unwrap();
        let report = analyze_receipts(dir.path()).unwrap();

        assert!(report.has_no_valid_data());
        assert!(report.invalid_files.is_empty());
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.summary.avg_expense_per_year, Metric::Unavailable);
        assert!(report.chart.expense_data.is_empty());
    }

    #[test]
    fn test_analyze_receipts_basic_pipeline() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2021-01-15 - doctor - $50.00.pdf");
        touch(dir.path(), "2021-02-20 - pharmacy - $30.50.reimbursed.pdf");
        touch(dir.path(), "2022-02-20 - pharmacy - $19.50.pdf");
        touch(dir.path(), "scan.pdf");

        let report = analyze_receipts(dir.path()).unwrap();

        assert_eq!(report.metadata.years_found, 2);
        assert_eq!(report.table.total().unwrap().expenses, "$100.00");
        assert_eq!(report.table.total().unwrap().reimbursements, "$30.50");
        assert_eq!(report.invalid_files.len(), 1);
        assert_eq!(report.summary.total_files, 4);
        assert_eq!(report.chart.expense_data.len(), 2);
    }

    #[test]
    fn test_analyze_receipts_metadata_fields_populated() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2021-01-15 - doctor - $50.00.pdf");

        let report = analyze_receipts(dir.path()).unwrap();

        assert!(!report.metadata.generated_at.is_empty());
        assert!(report.metadata.scan_time_seconds >= 0.0);
        assert_eq!(report.metadata.directory, dir.path());
    }

    #[test]
    fn test_analyze_receipts_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = analyze_receipts(&dir.path().join("gone")).unwrap_err();
        assert!(err.is_directory_access());
    }

    // ── serialisation ─────────────────────────────────────────────────────────

    #[test]
    fn test_report_json_shape() {
        let result = Aggregator::from_file_names(["2021-01-15 - doctor - $50.00.pdf", "bad.txt"]);
        let report = AnalysisReport::from_aggregation(&result, Path::new("/receipts"), 0.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["table"]["Total"]["expenses"], "$50.00");
        assert_eq!(json["invalid_files"][0]["file_name"], "bad.txt");
        assert_eq!(json["summary"]["reimbursement_rate"], "0.0");
        assert_eq!(json["metadata"]["directory"], "/receipts");
        assert!(json.get("chart").is_none());
    }
}
