//! budget-chart - Terminal budget charting with username validation
//!
//! This library provides the core functionality for the budget-chart
//! application: it turns twelve months of income/expense figures into a
//! grouped bar chart (rendered in the terminal and exportable as a PNG)
//! and validates usernames against a fixed character-class rule.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (months, budget series)
//! - `budget`: Aggregation of raw form values into chart series
//! - `validate`: Username validation rule
//! - `chart`: Chart state, scaling, and currency formatting
//! - `export`: PNG rendering of the chart
//! - `tui`: Interactive terminal interface
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust
//! use budget_chart::budget::aggregate;
//! use budget_chart::validate::validate;
//!
//! let series = aggregate(&["100", "abc", "50"], &[]);
//! assert_eq!(series.income[0], 100.0);
//! assert!(validate("Tes1@").is_valid());
//! ```

pub mod budget;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod tui;
pub mod validate;

pub use error::BudgetChartError;
