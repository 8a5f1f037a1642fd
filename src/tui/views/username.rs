//! Username view
//!
//! The username form plus the validation feedback banner. The input border
//! mirrors the page's is-valid/is-invalid field classes: green after an
//! accepted submission, red after a rejected one.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::tui::layout::UsernameLayout;
use crate::tui::widgets::banner::BannerWidget;
use crate::validate::{MIN_LENGTH, SPECIAL_CHARS};

/// Render the username view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Username Validation ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = UsernameLayout::new(inner);

    render_form(frame, app, layout.form);

    if let Some(ref banner) = app.banner {
        frame.render_widget(BannerWidget::new(banner), layout.banner);
    } else {
        render_requirements_hint(frame, layout.banner);
    }
}

/// Render the input field inside its feedback-colored border
fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = match app.banner.as_ref() {
        Some(banner) => banner.kind.color(),
        None => Color::White,
    };

    let form_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Username ");
    let input_area = form_block.inner(area);
    frame.render_widget(form_block, area);

    app.username_input.focused = app.input_mode == InputMode::Editing;
    frame.render_widget(&app.username_input, input_area);
}

/// Shown before the first submission
fn render_requirements_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            "i: edit, Enter: submit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "Requires an uppercase letter, a digit, one of {}, and {}+ characters.",
                SPECIAL_CHARS, MIN_LENGTH
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    frame.render_widget(hint, area);
}
