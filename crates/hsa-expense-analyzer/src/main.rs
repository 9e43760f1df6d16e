mod bootstrap;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use receipt_core::ReceiptError;
use receipt_data::analysis::analyze_receipts;
use receipt_ui::app::{render_json, render_report, RenderOptions};
use receipt_ui::table_view::render_invalid_files;
use receipt_ui::themes::Theme;

use crate::settings::Settings;

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("HSA Expense Analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&settings, &mut stdout.lock(), &mut stderr.lock()) {
        // The reader went away (e.g. `| head`); nothing left to report.
        Err(err) if is_broken_pipe(&err) => Ok(ExitCode::SUCCESS),
        other => other,
    }
}

/// Scan the configured directory and write the report to `out`.
///
/// Directory failures and runs without a single valid receipt write an
/// `❌ Error:` message to `err` and return [`ExitCode::FAILURE`].
fn run(settings: &Settings, out: &mut impl Write, err: &mut impl Write) -> Result<ExitCode> {
    let theme = Theme::from_no_color(settings.no_color || settings.json);
    let dir_path = bootstrap::resolve_dir_path(&settings.dir_path)?;
    tracing::debug!("Scanning {}", dir_path.display());

    let report = match analyze_receipts(&dir_path) {
        Ok(report) => report,
        Err(e) if e.is_directory_access() => {
            writeln!(err, "{}", theme.error("❌ Error: Cannot access directory"))?;
            writeln!(err, "   {}", e)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if report.has_no_valid_data() {
        // Rejected names are still worth showing before bailing out.
        if !settings.json && !report.invalid_files.is_empty() {
            writeln!(out, "{}", render_invalid_files(&report.invalid_files, &theme))?;
            out.flush()?;
        }
        let no_data = ReceiptError::NoValidData(dir_path);
        writeln!(err, "{}", theme.error(&format!("❌ Error: {no_data}")))?;
        return Ok(ExitCode::FAILURE);
    }

    if settings.json {
        writeln!(out, "{}", render_json(&report)?)?;
    } else {
        let options = RenderOptions {
            summary_only: settings.summary_only,
        };
        writeln!(out, "{}", render_report(&report, &options, &theme))?;
    }
    out.flush()?;

    tracing::info!(
        "Processed {} files in {:.3}s",
        report.summary.total_files,
        report.metadata.scan_time_seconds
    );

    Ok(ExitCode::SUCCESS)
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
