//! Calendar month type
//!
//! Months are a fixed ordered set used purely as positional keys for the
//! twelve budget slots. They are never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of month slots in a budget year
pub const MONTH_COUNT: usize = 12;

/// One of the twelve fixed calendar positions used to key budget entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order, Jan through Dec
    pub const ALL: [Month; MONTH_COUNT] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based calendar index (Jan = 0, Dec = 11)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a month by zero-based index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter abbreviation used as the chart label
    pub const fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_order() {
        assert_eq!(Month::ALL.len(), MONTH_COUNT);
        assert_eq!(Month::Jan.index(), 0);
        assert_eq!(Month::Dec.index(), 11);

        // Indexes are contiguous and match positions in ALL
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), Some(*month));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Month::Jan.abbrev(), "Jan");
        assert_eq!(format!("{}", Month::Sep), "Sep");
    }
}
