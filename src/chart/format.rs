//! Currency formatting for chart ticks and value labels
//!
//! Axis and tooltip values render as the configured currency symbol plus a
//! thousands-grouped number, e.g. `$1,500` or `$12,345.5`. Formatting is
//! purely presentational; the underlying series values are never rounded
//! in place.

/// Format a value as a currency label with the given symbol.
///
/// The integer part is grouped with commas. A non-integral remainder keeps
/// up to two fractional digits with trailing zeros trimmed.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let negative = value < 0.0;
    // Round to cents first so e.g. 999.999 becomes $1,000
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let grouped = group_thousands(int_part);
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert comma separators into a string of decimal digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_values() {
        assert_eq!(format_currency(0.0, "$"), "$0");
        assert_eq!(format_currency(5.0, "$"), "$5");
        assert_eq!(format_currency(1500.0, "$"), "$1,500");
        assert_eq!(format_currency(1234567.0, "$"), "$1,234,567");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_currency(1234.5, "$"), "$1,234.5");
        assert_eq!(format_currency(0.25, "$"), "$0.25");
        assert_eq!(format_currency(10.10, "$"), "$10.1");
    }

    #[test]
    fn test_rounding_carries() {
        assert_eq!(format_currency(999.999, "$"), "$1,000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-1500.0, "$"), "-$1,500");
        assert_eq!(format_currency(-0.5, "$"), "-$0.5");
        // Rounds to zero: no negative sign on "$0"
        assert_eq!(format_currency(-0.001, "$"), "$0");
    }

    #[test]
    fn test_configured_symbol() {
        assert_eq!(format_currency(1500.0, "£"), "£1,500");
        assert_eq!(format_currency(-12.5, "€"), "-€12.5");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_currency(100.0, "$"), "$100");
        assert_eq!(format_currency(1000.0, "$"), "$1,000");
        assert_eq!(format_currency(10000.0, "$"), "$10,000");
        assert_eq!(format_currency(100000.0, "$"), "$100,000");
    }
}
