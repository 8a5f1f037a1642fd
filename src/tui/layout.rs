//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the username tab: form on top, banner below
pub struct UsernameLayout {
    /// Input form area
    pub form: Rect,
    /// Feedback banner area
    pub banner: Rect,
}

impl UsernameLayout {
    /// Calculate username tab layout
    pub fn new(area: Rect) -> Self {
        let form = centered_rect_fixed(50, 3, area);

        // Banner sits below the form, clamped to the remaining area
        let banner_y = (form.y + form.height + 1).min(area.y + area.height);
        let available = (area.y + area.height).saturating_sub(banner_y);
        let banner = Rect::new(form.x, banner_y, form.width, available.min(5));

        Self { form, banner }
    }
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 3;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
