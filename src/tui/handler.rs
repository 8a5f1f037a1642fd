//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the active
//! tab and input mode. Every handler is synchronous and completes
//! immediately; all feedback goes through the banner or the status bar.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveTab, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            let next = app.active_tab.next();
            app.switch_tab(next);
            return Ok(());
        }
        KeyCode::BackTab => {
            let prev = app.active_tab.prev();
            app.switch_tab(prev);
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::Budget);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Chart);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_tab(ActiveTab::Username);
            return Ok(());
        }
        _ => {}
    }

    // Tab-specific keys
    match app.active_tab {
        ActiveTab::Budget => handle_budget_key(app, key),
        ActiveTab::Chart => handle_chart_key(app, key),
        ActiveTab::Username => handle_username_key(app, key),
    }
}

/// Handle keys on the budget tab in normal mode
fn handle_budget_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
            app.toggle_column();
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.clear_status();
            app.focused_budget_input().move_end();
            app.input_mode = InputMode::Editing;
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the chart tab in normal mode
fn handle_chart_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('d') => app.export_chart(),
        KeyCode::Char('r') => {
            app.refresh_chart();
            app.set_status("Chart refreshed");
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the username tab in normal mode
fn handle_username_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('i') => {
            app.username_input.move_end();
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter => app.submit_username(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while editing an input
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            // Submitting the form is the Enter action on the username tab
            if app.active_tab == ActiveTab::Username {
                app.submit_username();
            }
        }
        KeyCode::Backspace => app.active_input().backspace(),
        KeyCode::Delete => app.active_input().delete(),
        KeyCode::Left => app.active_input().move_left(),
        KeyCode::Right => app.active_input().move_right(),
        KeyCode::Home => app.active_input().move_start(),
        KeyCode::End => app.active_input().move_end(),
        KeyCode::Up if app.active_tab == ActiveTab::Budget => app.move_up(),
        KeyCode::Down if app.active_tab == ActiveTab::Budget => app.move_down(),
        KeyCode::Tab if app.active_tab == ActiveTab::Budget => app.toggle_column(),
        KeyCode::Char(c) => {
            if accepts_char(app, c) {
                app.active_input().insert(c);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Whether the focused input accepts this character.
///
/// Budget fields take number-shaped text only; anything that slips through
/// and fails to parse still aggregates to zero. The username field takes
/// free text and leaves rejection to the validation rule.
fn accepts_char(app: &App, c: char) -> bool {
    match app.active_tab {
        // The rule's alphabet is ASCII; wider input would only be rejected
        ActiveTab::Username => c.is_ascii() && !c.is_control(),
        _ => c.is_ascii_digit() || c == '.' || c == '-',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BudgetChartPaths, Settings};
    use crate::tui::app::BudgetColumn;
    use crate::tui::widgets::BannerKind;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn fixtures() -> (Settings, BudgetChartPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetChartPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Settings::default(), paths, temp_dir)
    }

    #[test]
    fn test_quit_key() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Chart);

        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Username);

        handle_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Budget);
    }

    #[test]
    fn test_budget_editing_flow() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        // Enter edit mode and type an amount
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "150.25".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        // Letters are filtered out of budget fields
        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();

        assert_eq!(app.income_inputs[0].value(), "150.25");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_grid_navigation_keys() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        handle_event(&mut app, key(KeyCode::Down)).unwrap();
        handle_event(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.focused_row, 2);

        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.focused_column, BudgetColumn::Expense);
    }

    #[test]
    fn test_username_submit_via_enter() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);
        app.switch_tab(ActiveTab::Username);

        handle_event(&mut app, key(KeyCode::Char('i'))).unwrap();
        for c in "Tes1@".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.input_mode, InputMode::Normal);
        let banner = app.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
    }

    #[test]
    fn test_chart_tab_shows_current_form_values() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        for c in "500".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();

        handle_event(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.chart.series().income[0], 500.0);
    }
}
