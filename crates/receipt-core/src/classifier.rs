//! Receipt filename classifier.
//!
//! Accepts names of the form
//! `yyyy-mm-dd - description - $amount.ext` or
//! `yyyy-mm-dd - description - $amount.reimbursed.ext`.
//! Rules are checked in a fixed order and the first one that fails decides
//! the diagnostic, so the same name always produces the same error.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::ValidationError;
use crate::models::{Classification, ParsedEntry, RejectedEntry, REIMBURSED_MARKER};

/// Separator between the date, description and amount parts.
pub const PART_SEPARATOR: &str = " - ";

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("regex is valid"))
}

fn extension_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.[A-Za-z]{2,5}$").expect("regex is valid"))
}

fn amount_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("regex is valid"))
}

/// Classify a single filename.
pub fn classify(file_name: &str) -> Classification {
    match parse_file_name(file_name) {
        Ok(entry) => Classification::Valid(entry),
        Err(error) => Classification::Rejected(RejectedEntry::new(file_name, error)),
    }
}

/// Apply the naming rules in order, returning the parsed entry or the first
/// rule that failed.
pub fn parse_file_name(file_name: &str) -> Result<ParsedEntry, ValidationError> {
    let parts: Vec<&str> = file_name.split(PART_SEPARATOR).collect();
    let [date, _description, amount_part] = parts.as_slice() else {
        return Err(ValidationError::Format);
    };

    if !date_pattern().is_match(date) || !is_calendar_date(date) {
        return Err(ValidationError::Date(date.to_string()));
    }

    let Some(amount_body) = amount_part.strip_prefix('$') else {
        return Err(ValidationError::MissingDollarSign(amount_part.to_string()));
    };

    if !extension_pattern().is_match(amount_part) {
        return Err(ValidationError::MissingExtension);
    }

    let numeric = strip_suffix(amount_body);
    if !amount_pattern().is_match(numeric) {
        return Err(ValidationError::AmountFormat(amount_part.to_string()));
    }

    let amount: f64 = numeric
        .parse()
        .map_err(|_| ValidationError::AmountFormat(amount_part.to_string()))?;

    Ok(ParsedEntry {
        year: date[..4].to_string(),
        amount,
        is_reimbursement: file_name.contains(REIMBURSED_MARKER),
    })
}

/// Remove `.reimbursed.ext` or the final `.ext` from the amount body.
fn strip_suffix(amount_body: &str) -> &str {
    if let Some(idx) = amount_body.find(REIMBURSED_MARKER) {
        return &amount_body[..idx];
    }
    match amount_body.rfind('.') {
        Some(idx) => &amount_body[..idx],
        None => amount_body,
    }
}

/// Round-trip the digits through a real calendar date so that values like
/// `2021-13-01` or `2021-02-30` are rejected. Expects the digit pattern to
/// have matched already.
fn is_calendar_date(date: &str) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (
        date[0..4].parse::<i32>(),
        date[5..7].parse::<u32>(),
        date[8..10].parse::<u32>(),
    ) else {
        return false;
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.year() == year && d.month() == month && d.day() == day)
        .unwrap_or(false)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn error_text(name: &str) -> String {
        match classify(name) {
            Classification::Rejected(rejected) => rejected.message(),
            Classification::Valid(entry) => panic!("expected rejection, got {entry:?}"),
        }
    }

    // ── valid names ──────────────────────────────────────────────────────────

    #[test]
    fn test_parse_valid_expense() {
        let entry = parse_file_name("2021-01-15 - doctor - $50.00.pdf").unwrap();
        assert_eq!(
            entry,
            ParsedEntry {
                year: "2021".to_string(),
                amount: 50.0,
                is_reimbursement: false,
            }
        );
    }

    #[test]
    fn test_parse_valid_reimbursed() {
        let entry = parse_file_name("2021-02-20 - pharmacy - $30.50.reimbursed.pdf").unwrap();
        assert_eq!(entry.year, "2021");
        assert_eq!(entry.amount, 30.5);
        assert!(entry.is_reimbursement);
    }

    #[test]
    fn test_parse_different_extensions() {
        for ext in ["pdf", "jpg", "png", "jpeg", "HEIC"] {
            let name = format!("2022-03-10 - dentist - $100.00.{ext}");
            assert!(classify(&name).is_valid(), "{name} should be valid");
        }
    }

    #[test]
    fn test_parse_large_amount() {
        let entry = parse_file_name("2023-05-01 - surgery - $9999.99.pdf").unwrap();
        assert_eq!(entry.year, "2023");
        assert_eq!(entry.amount, 9999.99);
        assert!(!entry.is_reimbursement);
    }

    #[test]
    fn test_parse_reimbursed_jpg() {
        let entry = parse_file_name("2022-06-15 - glasses - $250.00.reimbursed.jpg").unwrap();
        assert_eq!(entry.amount, 250.0);
        assert!(entry.is_reimbursement);
    }

    #[test]
    fn test_parse_zero_amount_is_valid() {
        let entry = parse_file_name("2022-06-15 - free visit - $0.00.pdf").unwrap();
        assert_eq!(entry.amount, 0.0);
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(classify("2024-02-29 - clinic - $10.00.pdf").is_valid());
    }

    #[test]
    fn test_description_may_contain_dashes() {
        assert!(classify("2024-02-10 - x-ray-follow-up - $10.00.pdf").is_valid());
    }

    // ── rule 1: three parts ──────────────────────────────────────────────────

    #[test]
    fn test_reject_missing_date() {
        assert!(error_text("doctor - $50.00.pdf").contains("File name should have format"));
    }

    #[test]
    fn test_reject_missing_spaces_around_dashes() {
        assert!(error_text("2021-01-15- doctor - $50.00.pdf").contains("File name should have format"));
    }

    #[test]
    fn test_reject_too_many_parts() {
        let err = parse_file_name("2021-01-15 - doctor - visit - $50.00.pdf").unwrap_err();
        assert_eq!(err, ValidationError::Format);
    }

    // ── rules 2 & 3: date ────────────────────────────────────────────────────

    #[test]
    fn test_reject_short_date() {
        assert!(error_text("2021-1-5 - doctor - $50.00.pdf").contains("should be yyyy-mm-dd format"));
    }

    #[test]
    fn test_reject_invalid_month() {
        let err = parse_file_name("2021-13-01 - doctor - $50.00.pdf").unwrap_err();
        assert_eq!(err, ValidationError::Date("2021-13-01".to_string()));
        assert!(err.to_string().contains("should be yyyy-mm-dd format"));
    }

    #[test]
    fn test_reject_invalid_day() {
        assert!(error_text("2021-01-32 - doctor - $50.00.pdf").contains("should be yyyy-mm-dd format"));
        assert!(error_text("2021-02-30 - doctor - $50.00.pdf").contains("should be yyyy-mm-dd format"));
        assert!(error_text("2023-02-29 - doctor - $50.00.pdf").contains("should be yyyy-mm-dd format"));
    }

    #[test]
    fn test_reject_non_ascii_digits_in_date() {
        assert!(!classify("２０２１-01-15 - doctor - $50.00.pdf").is_valid());
    }

    // ── rule 4: dollar sign ──────────────────────────────────────────────────

    #[test]
    fn test_reject_missing_dollar() {
        assert!(error_text("2021-01-15 - doctor - 50.00.pdf").contains("should start with $"));
    }

    // ── rule 5: extension ────────────────────────────────────────────────────

    #[test]
    fn test_reject_missing_extension() {
        assert!(error_text("2021-01-15 - doctor - $50.00").contains("missing extension"));
    }

    #[test]
    fn test_reject_overlong_extension() {
        let err = parse_file_name("2021-01-15 - doctor - $50.00.tiffff").unwrap_err();
        assert_eq!(err, ValidationError::MissingExtension);
    }

    #[test]
    fn test_dollar_rule_checked_before_extension() {
        let err = parse_file_name("2021-01-15 - doctor - 50.00").unwrap_err();
        assert_eq!(err, ValidationError::MissingDollarSign("50.00".to_string()));
    }

    // ── rule 6: amount format ────────────────────────────────────────────────

    #[test]
    fn test_reject_whole_dollar_amount() {
        assert!(error_text("2021-01-15 - doctor - $50.pdf")
            .contains("should be a valid format like $50.00"));
    }

    #[test]
    fn test_reject_thousands_separator() {
        assert!(error_text("2021-01-15 - doctor - $1,000.00.pdf")
            .contains("should be a valid format like $50.00"));
    }

    #[test]
    fn test_reject_single_decimal_digit() {
        let err = parse_file_name("2021-01-15 - doctor - $5.5.reimbursed.pdf").unwrap_err();
        assert_eq!(
            err,
            ValidationError::AmountFormat("$5.5.reimbursed.pdf".to_string())
        );
    }

    #[test]
    fn test_reject_scientific_notation() {
        assert!(!classify("2021-01-15 - doctor - $1e3.00.pdf").is_valid());
    }

    // ── properties ───────────────────────────────────────────────────────────

    #[test]
    fn test_classify_is_idempotent() {
        for name in [
            "2021-01-15 - doctor - $50.00.pdf",
            "2021-13-01 - doctor - $50.00.pdf",
            "random.txt",
        ] {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[test]
    fn test_rejected_keeps_original_name() {
        match classify("2021-01-15 - doctor - $50.pdf") {
            Classification::Rejected(rejected) => {
                assert_eq!(rejected.file_name, "2021-01-15 - doctor - $50.pdf")
            }
            Classification::Valid(_) => panic!("expected rejection"),
        }
    }
}
