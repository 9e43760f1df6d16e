use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// Marker that flags a receipt as already reimbursed.
pub const REIMBURSED_MARKER: &str = ".reimbursed.";

/// A receipt filename that passed every naming rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEntry {
    /// Four-digit year taken from the date prefix.
    pub year: String,
    /// Dollar amount, exactly as encoded in the filename.
    pub amount: f64,
    /// Whether the filename carries the [`REIMBURSED_MARKER`].
    pub is_reimbursement: bool,
}

/// A filename that failed classification, with the first rule it broke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedEntry {
    /// The original name, unmodified.
    pub file_name: String,
    /// Diagnostic for the rule that failed.
    #[serde(serialize_with = "serialize_display")]
    pub error: ValidationError,
}

impl RejectedEntry {
    pub fn new(file_name: impl Into<String>, error: ValidationError) -> Self {
        Self {
            file_name: file_name.into(),
            error,
        }
    }

    /// Human-readable diagnostic text.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Outcome of classifying one filename.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Valid(ParsedEntry),
    Rejected(RejectedEntry),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid(_))
    }
}

fn serialize_display<S: Serializer>(error: &ValidationError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}
