//! Budget series model
//!
//! A `BudgetSeries` holds the two parallel 12-element sequences (income and
//! expenses, one value per month slot) that feed the bar chart. Values are
//! plain `f64` amounts; no rounding or currency formatting happens here.

use serde::{Deserialize, Serialize};

use super::month::{Month, MONTH_COUNT};

/// One month's income/expense pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Income amount for the month
    pub income: f64,
    /// Expense amount for the month
    pub expense: f64,
}

impl BudgetEntry {
    /// Create a new entry
    pub const fn new(income: f64, expense: f64) -> Self {
        Self { income, expense }
    }
}

/// The two chart series, always exactly 12 values each in calendar order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSeries {
    /// Income values, Jan through Dec
    pub income: [f64; MONTH_COUNT],
    /// Expense values, Jan through Dec
    pub expense: [f64; MONTH_COUNT],
}

impl BudgetSeries {
    /// Create a series with all values zero
    pub const fn zeroed() -> Self {
        Self {
            income: [0.0; MONTH_COUNT],
            expense: [0.0; MONTH_COUNT],
        }
    }

    /// Build a series from per-month entries
    pub fn from_entries(entries: &[BudgetEntry; MONTH_COUNT]) -> Self {
        let mut series = Self::zeroed();
        for (i, entry) in entries.iter().enumerate() {
            series.income[i] = entry.income;
            series.expense[i] = entry.expense;
        }
        series
    }

    /// The entry for a given month
    pub fn entry(&self, month: Month) -> BudgetEntry {
        let i = month.index();
        BudgetEntry::new(self.income[i], self.expense[i])
    }

    /// Total income across all months
    pub fn total_income(&self) -> f64 {
        self.income.iter().sum()
    }

    /// Total expenses across all months
    pub fn total_expense(&self) -> f64 {
        self.expense.iter().sum()
    }

    /// Largest value in either series, used for chart scaling
    pub fn max_value(&self) -> f64 {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0_f64, f64::max)
    }

    /// True if every value in both series is zero
    pub fn is_empty(&self) -> bool {
        self.income.iter().all(|v| *v == 0.0) && self.expense.iter().all(|v| *v == 0.0)
    }
}

impl Default for BudgetSeries {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let series = BudgetSeries::zeroed();
        assert_eq!(series.income.len(), 12);
        assert_eq!(series.expense.len(), 12);
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn test_totals() {
        let mut series = BudgetSeries::zeroed();
        series.income[0] = 100.0;
        series.income[1] = 50.5;
        series.expense[11] = 25.0;

        assert_eq!(series.total_income(), 150.5);
        assert_eq!(series.total_expense(), 25.0);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_max_value() {
        let mut series = BudgetSeries::zeroed();
        series.income[3] = 1200.0;
        series.expense[7] = 3400.0;
        assert_eq!(series.max_value(), 3400.0);
    }

    #[test]
    fn test_entry_lookup() {
        let mut series = BudgetSeries::zeroed();
        series.income[Month::Mar.index()] = 10.0;
        series.expense[Month::Mar.index()] = 4.0;

        let entry = series.entry(Month::Mar);
        assert_eq!(entry, BudgetEntry::new(10.0, 4.0));
    }

    #[test]
    fn test_from_entries() {
        let mut entries = [BudgetEntry::default(); 12];
        entries[5] = BudgetEntry::new(7.0, 3.0);

        let series = BudgetSeries::from_entries(&entries);
        assert_eq!(series.income[5], 7.0);
        assert_eq!(series.expense[5], 3.0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut series = BudgetSeries::zeroed();
        series.income[0] = 99.5;

        let json = serde_json::to_string(&series).unwrap();
        let back: BudgetSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
