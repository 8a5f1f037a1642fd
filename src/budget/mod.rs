//! Budget aggregation
//!
//! Collects twelve month-indexed raw income/expense values into the two
//! ordered numeric sequences the chart consumes. Aggregation is a pure
//! function of its inputs: nothing is cached and nothing is mutated, so
//! calling it twice with the same raw values yields identical series.

use crate::models::month::MONTH_COUNT;
use crate::models::{BudgetEntry, BudgetSeries};

/// Parse a raw form value as an amount.
///
/// The longest leading numeric prefix is used, so `"12abc"` parses as
/// `12.0` and trailing units or typos do not discard the number. Input
/// with no numeric prefix, or one that is non-finite, becomes `0.0`.
/// Finite values are used as-is, with no rounding.
pub fn parse_amount(raw: &str) -> f64 {
    match numeric_prefix(raw.trim()).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// The longest prefix of `s` that reads as a signed decimal number,
/// optionally with an exponent. Empty when `s` starts with no digit
/// (after an optional sign or decimal point).
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let mut saw_digit = false;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
        saw_digit = true;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return "";
    }

    // Take an exponent only when it is complete; "1e" stays "1"
    let mut end = i;
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let mut saw_exp_digit = false;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
            saw_exp_digit = true;
        }
        if saw_exp_digit {
            end = j;
        }
    }

    &s[..end]
}

/// Aggregate raw income and expense values into a [`BudgetSeries`].
///
/// Each input slice is read positionally against the twelve month slots in
/// calendar order. Missing slots (inputs shorter than twelve) and
/// unparseable values become `0.0`; values beyond the twelfth are ignored.
/// The result always holds exactly twelve values per side.
pub fn aggregate<S: AsRef<str>>(raw_incomes: &[S], raw_expenses: &[S]) -> BudgetSeries {
    let entries: [BudgetEntry; MONTH_COUNT] = std::array::from_fn(|slot| BudgetEntry {
        income: slot_amount(raw_incomes, slot),
        expense: slot_amount(raw_expenses, slot),
    });
    BudgetSeries::from_entries(&entries)
}

fn slot_amount<S: AsRef<str>>(raw: &[S], slot: usize) -> f64 {
    raw.get(slot).map_or(0.0, |v| parse_amount(v.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("100.25"), 100.25);
        assert_eq!(parse_amount(" 42 "), 42.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_parse_amount_numeric_prefix() {
        // A trailing unit or typo keeps the leading number
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("3.5kg"), 3.5);
        assert_eq!(parse_amount("-2.5x"), -2.5);
        assert_eq!(parse_amount("1e2h"), 100.0);
        // An incomplete exponent is not part of the number
        assert_eq!(parse_amount("1e"), 1.0);
        assert_eq!(parse_amount(".5left"), 0.5);
        // The number must lead
        assert_eq!(parse_amount("abc12"), 0.0);
        assert_eq!(parse_amount("$100"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn test_parse_amount_non_finite() {
        // Word spellings carry no numeric prefix; an overflowing one
        // parses to infinity and is equally unusable as a chart value
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    #[test]
    fn test_all_unparseable_input() {
        let empty: Vec<String> = vec![String::new(); 12];
        let series = aggregate(&empty, &empty);

        assert_eq!(series.income, [0.0; 12]);
        assert_eq!(series.expense, [0.0; 12]);
    }

    #[test]
    fn test_mixed_input() {
        let incomes = vec![
            "100", "abc", "50", "", "", "", "", "", "", "", "", "",
        ];
        let series = aggregate(&incomes, &Vec::<&str>::new());

        assert_eq!(
            series.income,
            [100.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(series.expense, [0.0; 12]);
    }

    #[test]
    fn test_short_input_pads_with_zero() {
        let incomes = vec!["10", "20"];
        let series = aggregate(&incomes, &[]);

        assert_eq!(series.income[0], 10.0);
        assert_eq!(series.income[1], 20.0);
        assert_eq!(&series.income[2..], &[0.0; 10]);
    }

    #[test]
    fn test_extra_input_is_ignored() {
        let incomes: Vec<String> = (1..=15).map(|n| n.to_string()).collect();
        let series = aggregate(&incomes, &[]);

        assert_eq!(series.income[11], 12.0);
        // Values 13..15 have no month slot
        assert_eq!(series.income.len(), 12);
    }

    #[test]
    fn test_idempotence() {
        let incomes = vec!["1.5", "2", "x", "4"];
        let expenses = vec!["9", "", "7"];

        let first = aggregate(&incomes, &expenses);
        let second = aggregate(&incomes, &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_values_pass_through() {
        // Matches parseFloat semantics: a finite parse is used as-is
        let series = aggregate(&["-25.5"], &[]);
        assert_eq!(series.income[0], -25.5);
    }
}
