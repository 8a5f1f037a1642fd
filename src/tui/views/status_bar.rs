//! Status bar view
//!
//! Shows the transient status message and key hints for the active tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveTab, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    // Active tab indicator
    spans.push(Span::styled(
        format!(" {} ", app.active_tab.title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = hints_for(app);

    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Key hints for the current tab and mode
fn hints_for(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " Esc:Done  Enter:Commit ";
    }
    match app.active_tab {
        ActiveTab::Budget => " q:Quit  Tab:Next tab  arrows:Move  i:Edit ",
        ActiveTab::Chart => " q:Quit  Tab:Next tab  s:Save PNG  r:Refresh ",
        ActiveTab::Username => " q:Quit  Tab:Next tab  i:Edit  Enter:Submit ",
    }
}
