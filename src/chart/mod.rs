//! Chart state and presentation helpers
//!
//! Holds the explicitly owned chart state (the last aggregated series),
//! the currency tick formatting, and the axis scale computation shared by
//! the terminal chart and the PNG export.

pub mod format;
pub mod scale;
pub mod state;

pub use format::format_currency;
pub use scale::{nice_scale, Scale};
pub use state::ChartState;

/// Income bar color, shared by the TUI and the PNG export
pub const INCOME_RGB: (u8, u8, u8) = (75, 192, 192);

/// Expense bar color, shared by the TUI and the PNG export
pub const EXPENSE_RGB: (u8, u8, u8) = (255, 99, 132);

/// Legend label for the income series
pub const INCOME_LABEL: &str = "Income";

/// Legend label for the expense series
pub const EXPENSE_LABEL: &str = "Expenses";
