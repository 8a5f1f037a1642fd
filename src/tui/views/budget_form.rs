//! Budget form view
//!
//! A 12-row grid of month-labeled income and expense inputs, the terminal
//! counterpart of the page's 24 numeric fields.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, BudgetColumn, InputMode};
use crate::tui::widgets::TextInput;
use crate::models::Month;

/// Render the budget form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Monthly Budget ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Header row plus one row per month
    let mut constraints = vec![Constraint::Length(1); Month::ALL.len() + 1];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_header(frame, rows[0]);

    let editing = app.input_mode == InputMode::Editing;
    for (i, month) in Month::ALL.iter().enumerate() {
        render_row(frame, app, rows[i + 1], *month, i, editing);
    }
}

/// Render the column headers
fn render_header(frame: &mut Frame, area: Rect) {
    let columns = split_row(area);

    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled("Month", style)), columns[0]);
    frame.render_widget(Paragraph::new(Span::styled("Income", style)), columns[1]);
    frame.render_widget(Paragraph::new(Span::styled("Expenses", style)), columns[2]);
}

/// Render one month row
fn render_row(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    month: Month,
    row: usize,
    editing: bool,
) {
    if area.height == 0 {
        return;
    }
    let columns = split_row(area);

    let row_focused = app.focused_row == row;
    let label_style = if row_focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(Paragraph::new(Span::styled(month.abbrev(), label_style)), columns[0]);

    let income_focused = row_focused && app.focused_column == BudgetColumn::Income;
    let expense_focused = row_focused && app.focused_column == BudgetColumn::Expense;

    render_cell(frame, &mut app.income_inputs[row], columns[1], income_focused && editing);
    render_cell(frame, &mut app.expense_inputs[row], columns[2], expense_focused && editing);

    // Mark the focused cell in normal mode so navigation stays visible
    if !editing && row_focused {
        let marker_area = match app.focused_column {
            BudgetColumn::Income => columns[1],
            BudgetColumn::Expense => columns[2],
        };
        let marker = Paragraph::new(Span::styled(
            ">",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            marker,
            Rect::new(marker_area.x.saturating_sub(2), marker_area.y, 1, 1),
        );
    }
}

/// Render a single input cell with its focus state
fn render_cell(frame: &mut Frame, input: &mut TextInput, area: Rect, focused: bool) {
    input.focused = focused;
    frame.render_widget(&*input, area);
}

/// Split a row into the month label and the two input columns
fn split_row(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),  // Month label
            Constraint::Length(20), // Income
            Constraint::Length(20), // Expenses
            Constraint::Min(0),
        ])
        .split(area)
}
