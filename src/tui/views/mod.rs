//! TUI Views module
//!
//! Contains the three tab views (budget form, chart, username) plus the
//! tab bar and status bar.

pub mod budget_form;
pub mod chart;
pub mod status_bar;
pub mod tabs;
pub mod username;

use ratatui::Frame;

use super::app::{ActiveTab, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render tab bar
    tabs::render(frame, app, layout.tabs);

    // Render main view based on active tab
    match app.active_tab {
        ActiveTab::Budget => budget_form::render(frame, app, layout.main),
        ActiveTab::Chart => chart::render(frame, app, layout.main),
        ActiveTab::Username => username::render(frame, app, layout.main),
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);
}
