//! Core data models for budget-chart
//!
//! Contains the calendar month type and the budget series that feeds the
//! chart. All values here are transient: they are recomputed from the
//! current form state on every aggregation and never persisted.

pub mod month;
pub mod series;

pub use month::Month;
pub use series::{BudgetEntry, BudgetSeries};
