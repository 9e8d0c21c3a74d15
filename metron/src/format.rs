//! Result formatting for display

/// Fractional digits used when the caller does not specify.
pub const DEFAULT_DECIMALS: usize = 6;

/// Render a conversion result as a display string.
///
/// Magnitudes below `1e-6` or above `1e12` use normalized scientific
/// notation with `decimals` fractional digits; everything else is
/// fixed-point rounded to `decimals` digits with trailing zeros (and a
/// trailing decimal point) stripped, so `12.000000` renders as `"12"` and
/// `1.5` stays `"1.5"`.
///
/// Purely presentational: the output must never be fed back into
/// [`convert`](crate::convert).
pub fn format_result(value: f64, decimals: usize) -> String {
    if value.abs() < 1e-6 || value.abs() > 1e12 {
        return format!("{:.prec$e}", value, prec = decimals);
    }

    let fixed = format!("{:.prec$}", value, prec = decimals);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_magnitudes_go_scientific() {
        assert_eq!(format_result(5e-9, 6), "5.000000e-9");
        assert_eq!(format_result(-5e-9, 6), "-5.000000e-9");
        assert_eq!(format_result(9.9e-7, 6), "9.900000e-7");
    }

    #[test]
    fn test_large_magnitudes_go_scientific() {
        assert_eq!(format_result(3e12, 6), "3.000000e12");
        assert_eq!(format_result(1.44e26, 2), "1.44e26");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // exactly 1e-6 and exactly 1e12 stay fixed-point
        assert_eq!(format_result(1e-6, 6), "0.000001");
        assert_eq!(format_result(1e12, 6), "1000000000000");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_result(12.0, 6), "12");
        assert_eq!(format_result(1.5, 6), "1.5");
        assert_eq!(format_result(0.30482, 3), "0.305");
    }

    #[test]
    fn test_decimals_parameter() {
        assert_eq!(format_result(1.23456789, 2), "1.23");
        assert_eq!(format_result(1.23456789, 0), "1");
        assert_eq!(format_result(5e-9, 2), "5.00e-9");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_result(-12.0, 6), "-12");
        assert_eq!(format_result(-1.5, 6), "-1.5");
    }

    #[test]
    fn test_zero_is_below_the_small_threshold() {
        // |0| < 1e-6, so zero renders scientific like any other tiny value
        assert_eq!(format_result(0.0, 6), "0.000000e0");
    }
}
