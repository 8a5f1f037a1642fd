//! Tab bar view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::{ActiveTab, App};

/// Render the tab bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let titles: Vec<&str> = ActiveTab::ALL.iter().map(|t| t.title()).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Budget Chart "),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.active_tab.index());

    frame.render_widget(tabs, area);
}
