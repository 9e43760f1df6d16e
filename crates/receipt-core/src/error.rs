use std::path::PathBuf;
use thiserror::Error;

/// Why a receipt filename was rejected by the classifier.
///
/// One variant per naming rule. The `Display` text is the diagnostic shown to
/// the user, so the wording is part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name does not split into exactly three `" - "` separated parts.
    #[error("File name should have format \"yyyy-mm-dd - description - $amount.ext\"")]
    Format,

    /// The date part is not `yyyy-mm-dd` or is not a real calendar date.
    #[error("Date \"{0}\" should be yyyy-mm-dd format")]
    Date(String),

    /// The amount part does not begin with a dollar sign.
    #[error("Amount \"{0}\" should start with $")]
    MissingDollarSign(String),

    /// The amount part does not end in a 2-5 letter extension.
    #[error("File is missing extension (e.g. .pdf, .jpg)")]
    MissingExtension,

    /// The numeric portion is not `digits.dd`.
    #[error("Amount \"{0}\" should be a valid format like $50.00")]
    AmountFormat(String),
}

/// Run-level errors produced by the analyzer.
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// The receipts directory could not be listed.
    #[error("Cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The receipts path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The scan finished without a single valid receipt.
    #[error("No valid receipt files found in {0}")]
    NoValidData(PathBuf),

    /// The report could not be serialised.
    #[error("Failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReceiptError {
    /// `true` for the errors that mean the directory itself was unusable.
    pub fn is_directory_access(&self) -> bool {
        matches!(
            self,
            ReceiptError::DirectoryAccess { .. } | ReceiptError::NotADirectory(_)
        )
    }
}

/// Convenience alias used throughout the receipt crates.
pub type Result<T> = std::result::Result<T, ReceiptError>;
