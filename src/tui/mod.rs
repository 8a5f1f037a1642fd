//! Terminal User Interface module
//!
//! This module provides the interactive interface for budget-chart using
//! ratatui: a budget input tab, a chart tab with PNG export, and a
//! username validation tab.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
