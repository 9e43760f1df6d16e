use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

const EPILOGUE: &str = "Expected file format:
  <yyyy-mm-dd> - <description> - $<amount>.<ext>
  <yyyy-mm-dd> - <description> - $<amount>.reimbursed.<ext>";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyze HSA expenses and reimbursements by year from receipt files 📊
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hsa-expense-analyzer",
    about = "Analyze HSA expenses and reimbursements by year from receipt files 📊",
    after_help = EPILOGUE,
    version
)]
pub struct Settings {
    /// The directory path containing receipt files
    #[arg(short = 'd', long = "dir-path", visible_alias = "dirPath")]
    pub dir_path: PathBuf,

    /// Disable coloured output (also set by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Only print the summary statistics
    #[arg(short = 's', long)]
    pub summary_only: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "WARN", value_parser = ["DEBUG", "INFO", "WARN", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply `--debug` and `NO_COLOR`.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args), std::env::var_os("NO_COLOR"))
    }

    fn resolve(mut settings: Settings, no_color_env: Option<OsString>) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings.no_color = no_color_requested(settings.no_color, no_color_env.as_deref());
        settings
    }
}

/// `--no-color`, or `NO_COLOR` set to any non-empty value.
fn no_color_requested(flag: bool, env: Option<&std::ffi::OsStr>) -> bool {
    flag || env.is_some_and(|value| !value.is_empty())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
