//! Chart view
//!
//! Renders the grouped income/expense bar chart with currency value
//! labels, mirroring the exported PNG.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::chart::{format_currency, EXPENSE_LABEL, EXPENSE_RGB, INCOME_LABEL, INCOME_RGB};
use crate::models::Month;
use crate::tui::app::App;

const INCOME_COLOR: Color = Color::Rgb(INCOME_RGB.0, INCOME_RGB.1, INCOME_RGB.2);
const EXPENSE_COLOR: Color = Color::Rgb(EXPENSE_RGB.0, EXPENSE_RGB.1, EXPENSE_RGB.2);

/// Render the chart view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Chart (s: save PNG) ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Legend
            Constraint::Min(3),    // Bars
        ])
        .split(inner);

    render_legend(frame, app, chunks[0]);
    render_bars(frame, app, chunks[1]);
}

/// Render the legend and axis summary line
fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let scale = app.chart.scale();
    let symbol = &app.settings.currency_symbol;

    let line = Line::from(vec![
        Span::styled("■ ", Style::default().fg(INCOME_COLOR)),
        Span::raw(INCOME_LABEL),
        Span::raw("   "),
        Span::styled("■ ", Style::default().fg(EXPENSE_COLOR)),
        Span::raw(EXPENSE_LABEL),
        Span::raw("   "),
        Span::styled(
            format!("y-axis: 0 to {}", format_currency(scale.upper, symbol)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the grouped bars
fn render_bars(frame: &mut Frame, app: &App, area: Rect) {
    let series = app.chart.series();
    let scale = app.chart.scale();
    let symbol = &app.settings.currency_symbol;

    let mut chart = BarChart::default()
        .bar_width(3)
        .bar_gap(0)
        .group_gap(1)
        .max(scale.upper.ceil() as u64);

    for month in Month::ALL {
        let entry = series.entry(month);
        let group = BarGroup::default()
            .label(Line::from(Span::styled(
                month.abbrev(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .bars(&[
                value_bar(entry.income, INCOME_COLOR, symbol),
                value_bar(entry.expense, EXPENSE_COLOR, symbol),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Build one bar with a currency text label
fn value_bar(value: f64, color: Color, symbol: &str) -> Bar<'static> {
    // Bars take integer heights; the label keeps the exact value
    Bar::default()
        .value(value.max(0.0).round() as u64)
        .text_value(format_currency(value, symbol))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}
