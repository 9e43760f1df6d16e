//! Receipts directory listing.
//!
//! Reads a single directory level and feeds each entry name through the
//! [`Aggregator`]. Listing order is preserved for the invalid-file report.

use std::path::Path;

use receipt_core::error::{ReceiptError, Result};
use tracing::{debug, warn};

use crate::aggregator::{AggregationResult, Aggregator, FoldOutcome};

/// Entry names directly inside `dir_path`, in listing order.
///
/// Fails with [`ReceiptError::DirectoryAccess`] when the directory cannot be
/// read, or [`ReceiptError::NotADirectory`] when the path is a file.
pub fn list_file_names(dir_path: &Path) -> Result<Vec<String>> {
    let metadata = std::fs::metadata(dir_path).map_err(|source| ReceiptError::DirectoryAccess {
        path: dir_path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ReceiptError::NotADirectory(dir_path.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
            // The root itself could not be read: nothing was listed.
            Err(e) if e.depth() == 0 => {
                return Err(ReceiptError::DirectoryAccess {
                    path: dir_path.to_path_buf(),
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory listing failed")),
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir_path.display(), e);
            }
        }
    }

    Ok(names)
}

/// Scan `dir_path` and aggregate every receipt it contains.
///
/// An empty directory (or one holding only hidden files) yields an empty
/// [`AggregationResult`]; deciding whether that is fatal is up to the caller.
pub fn aggregate(dir_path: &Path) -> Result<AggregationResult> {
    let names = list_file_names(dir_path)?;

    let mut aggregator = Aggregator::new();
    let (mut counted, mut hidden, mut zero, mut rejected) = (0usize, 0usize, 0usize, 0usize);

    for name in &names {
        match aggregator.add_file_name(name) {
            FoldOutcome::Counted => counted += 1,
            FoldOutcome::Hidden => hidden += 1,
            FoldOutcome::ZeroAmount => {
                debug!("Ignoring zero-amount receipt {}", name);
                zero += 1;
            }
            FoldOutcome::Rejected => rejected += 1,
        }
    }

    debug!(
        "Scanned {} entries in {}: {} counted, {} invalid, {} hidden, {} zero-amount",
        names.len(),
        dir_path.display(),
        counted,
        rejected,
        hidden,
        zero
    );

    Ok(aggregator.finish())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
