/// Round `value` to `decimals` places, halves away from zero.
///
/// A tiny epsilon scaled to the magnitude of the value is added before
/// rounding so that decimal midpoints which are stored just below the half
/// in binary (e.g. `1.005`) still round up.
///
/// # Examples
///
/// ```
/// use receipt_core::formatting::round_to;
///
/// assert_eq!(round_to(123.456, 2), 123.46);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let negative = value < 0.0;
    let abs_value = value.abs();

    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    if negative && rounded != 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Format `value` with exactly `decimals` fractional digits, rounding as
/// [`round_to`] does.
///
/// # Examples
///
/// ```
/// use receipt_core::formatting::to_fixed;
///
/// assert_eq!(to_fixed(50.1, 2), "50.10");
/// assert_eq!(to_fixed(16.666, 1), "16.7");
/// assert_eq!(to_fixed(0.0, 2), "0.00");
/// ```
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    // Avoid printing "-0.00" for values that round to zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.prec$}", rounded, prec = decimals as usize)
}

/// Format a dollar amount as `$` followed by two decimals.
///
/// # Examples
///
/// ```
/// use receipt_core::formatting::format_currency;
///
/// assert_eq!(format_currency(123.456), "$123.46");
/// assert_eq!(format_currency(0.0),     "$0.00");
/// assert_eq!(format_currency(-9.99),   "$-9.99");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${}", to_fixed(amount, 2))
}

/// Calculate `(part / whole) * 100`.
///
/// Returns `None` when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    Some((part / whole) * 100.0)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── round_to ─────────────────────────────────────────────────────────────

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(123.456, 2), 123.46);
        assert_eq!(round_to(100.5 + 250.75, 2), 351.25);
    }

    #[test]
    fn test_round_to_removes_float_drift() {
        assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.005, 2), 1.01);
    }

    #[test]
    fn test_round_to_negative_zero() {
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }

    // ── to_fixed ─────────────────────────────────────────────────────────────

    #[test]
    fn test_to_fixed_pads() {
        assert_eq!(to_fixed(50.1, 2), "50.10");
        assert_eq!(to_fixed(150.0, 2), "150.00");
        assert_eq!(to_fixed(50.0, 1), "50.0");
    }

    #[test]
    fn test_to_fixed_rounds() {
        assert_eq!(to_fixed(100.0 / 6.0, 1), "16.7");
        assert_eq!(to_fixed(200.0 / 3.0, 1), "66.7");
    }

    #[test]
    fn test_to_fixed_never_prints_negative_zero() {
        assert_eq!(to_fixed(-0.0001, 2), "0.00");
    }

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_rounds() {
        assert_eq!(format_currency(123.456), "$123.46");
    }

    #[test]
    fn test_format_currency_pads() {
        assert_eq!(format_currency(50.1), "$50.10");
    }

    #[test]
    fn test_format_currency_large_has_no_grouping() {
        assert_eq!(format_currency(12_345.6), "$12345.60");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-9.99), "$-9.99");
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_basic() {
        let p = percentage(50.0, 200.0).unwrap();
        assert!((p - 25.0).abs() < 1e-9, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0), None);
    }

    #[test]
    fn test_percentage_zero_part() {
        assert_eq!(percentage(0.0, 100.0), Some(0.0));
    }
}
