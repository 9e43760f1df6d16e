use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let directive = log_level.to_lowercase();
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry().with(filter).with(layer).try_init()?;

    Ok(())
}

// ── Path resolution ────────────────────────────────────────────────────────────

/// Replace a leading `~` with `home`.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` paths
/// are returned unchanged, as is everything when `home` is `None`.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Expand `~` and make `path` absolute against the current directory.
pub fn resolve_dir_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = expand_home(path, dirs::home_dir().as_deref());
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(std::env::current_dir()?.join(expanded))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── expand_home ───────────────────────────────────────────────────────────

    #[test]
    fn test_expand_home_tilde_prefix() {
        let home = Path::new("/home/alex");
        assert_eq!(
            expand_home(Path::new("~/Documents/HSA"), Some(home)),
            PathBuf::from("/home/alex/Documents/HSA")
        );
        assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/alex"));
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        let home = Path::new("/home/alex");
        assert_eq!(
            expand_home(Path::new("/var/receipts"), Some(home)),
            PathBuf::from("/var/receipts")
        );
        assert_eq!(
            expand_home(Path::new("~bob/receipts"), Some(home)),
            PathBuf::from("~bob/receipts")
        );
        assert_eq!(
            expand_home(Path::new("receipts/~"), Some(home)),
            PathBuf::from("receipts/~")
        );
    }

    #[test]
    fn test_expand_home_without_home_dir() {
        assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
    }

    // ── resolve_dir_path ──────────────────────────────────────────────────────

    #[test]
    fn test_resolve_dir_path_absolute_unchanged() {
        let tmp = TempDir::new().expect("tempdir");
        assert_eq!(resolve_dir_path(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn test_resolve_dir_path_relative_is_made_absolute() {
        let resolved = resolve_dir_path(Path::new("receipts")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("receipts"));
    }

    // ── setup_logging ─────────────────────────────────────────────────────────

    #[test]
    fn test_setup_logging_second_install_is_an_error() {
        // Only one global subscriber may be installed per process.
        let _ = setup_logging("DEBUG");
        assert!(setup_logging("WARN").is_err());
    }
}
