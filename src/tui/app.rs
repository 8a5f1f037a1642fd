//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the active tab, the 24 budget inputs plus the username input, the owned
//! chart handle, and the feedback banner.

use crate::budget::aggregate;
use crate::chart::ChartState;
use crate::config::paths::BudgetChartPaths;
use crate::config::settings::Settings;
use crate::export::export_to_dir;
use crate::models::month::MONTH_COUNT;
use crate::models::Month;
use crate::validate::validate;

use super::widgets::{Banner, TextInput};

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Budget,
    Chart,
    Username,
}

impl ActiveTab {
    /// All tabs in display order
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Budget, ActiveTab::Chart, ActiveTab::Username];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Chart => "Chart",
            Self::Username => "Username",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Self::Budget => 0,
            Self::Chart => 1,
            Self::Username => 2,
        }
    }

    /// The tab to the right, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which budget column holds the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetColumn {
    #[default]
    Income,
    Expense,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a BudgetChartPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Current input mode
    pub input_mode: InputMode,

    /// Income inputs, one per month slot
    pub income_inputs: [TextInput; MONTH_COUNT],

    /// Expense inputs, one per month slot
    pub expense_inputs: [TextInput; MONTH_COUNT],

    /// Username input
    pub username_input: TextInput,

    /// Focused row on the budget tab (month slot)
    pub focused_row: usize,

    /// Focused column on the budget tab
    pub focused_column: BudgetColumn,

    /// The owned chart handle (last aggregated series)
    pub chart: ChartState,

    /// Feedback banner from the last username submission
    pub banner: Option<Banner>,

    /// Transient status message for the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, paths: &'a BudgetChartPaths) -> Self {
        Self {
            settings,
            paths,
            should_quit: false,
            active_tab: ActiveTab::default(),
            input_mode: InputMode::default(),
            income_inputs: std::array::from_fn(|_| TextInput::new().placeholder("0")),
            expense_inputs: std::array::from_fn(|_| TextInput::new().placeholder("0")),
            username_input: TextInput::new().placeholder("Enter username"),
            focused_row: 0,
            focused_column: BudgetColumn::default(),
            chart: ChartState::new(),
            banner: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different tab
    ///
    /// Entering the chart tab re-aggregates the current form values, so the
    /// chart always reflects what the budget tab shows.
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        if tab == ActiveTab::Chart {
            self.refresh_chart();
        }
    }

    /// Re-aggregate the budget inputs and overwrite the chart series
    pub fn refresh_chart(&mut self) {
        let incomes: Vec<&str> = self.income_inputs.iter().map(|i| i.value()).collect();
        let expenses: Vec<&str> = self.expense_inputs.iter().map(|i| i.value()).collect();
        self.chart.update(aggregate(&incomes, &expenses));
    }

    /// Validate the username input and replace the banner
    pub fn submit_username(&mut self) {
        let result = validate(self.username_input.value());
        self.banner = Some(Banner::from_validation(&result));
    }

    /// Export the chart to the configured directory, reporting via status
    pub fn export_chart(&mut self) {
        self.refresh_chart();
        let dir = self.settings.resolve_export_dir(self.paths);
        match export_to_dir(&self.chart, &dir) {
            Ok(path) => self.set_status(format!("Saved {}", path.display())),
            Err(err) => self.set_status(format!("Export failed: {}", err)),
        }
    }

    /// The month for the focused budget row
    pub fn focused_month(&self) -> Month {
        Month::from_index(self.focused_row).unwrap_or(Month::Jan)
    }

    /// The budget input that currently has focus
    pub fn focused_budget_input(&mut self) -> &mut TextInput {
        match self.focused_column {
            BudgetColumn::Income => &mut self.income_inputs[self.focused_row],
            BudgetColumn::Expense => &mut self.expense_inputs[self.focused_row],
        }
    }

    /// The input being edited on the current tab
    pub fn active_input(&mut self) -> &mut TextInput {
        match self.active_tab {
            ActiveTab::Username => &mut self.username_input,
            _ => self.focused_budget_input(),
        }
    }

    /// Move focus up one budget row
    pub fn move_up(&mut self) {
        if self.focused_row > 0 {
            self.focused_row -= 1;
        }
    }

    /// Move focus down one budget row
    pub fn move_down(&mut self) {
        if self.focused_row < MONTH_COUNT - 1 {
            self.focused_row += 1;
        }
    }

    /// Toggle between the income and expense columns
    pub fn toggle_column(&mut self) {
        self.focused_column = match self.focused_column {
            BudgetColumn::Income => BudgetColumn::Expense,
            BudgetColumn::Expense => BudgetColumn::Income,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::BannerKind;
    use tempfile::TempDir;

    fn fixtures() -> (Settings, BudgetChartPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetChartPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Settings::default(), paths, temp_dir)
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ActiveTab::Budget.next(), ActiveTab::Chart);
        assert_eq!(ActiveTab::Username.next(), ActiveTab::Budget);
        assert_eq!(ActiveTab::Budget.prev(), ActiveTab::Username);
    }

    #[test]
    fn test_switch_to_chart_refreshes_series() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        app.income_inputs[0].content = "100".into();
        app.expense_inputs[2].content = "40.5".into();

        app.switch_tab(ActiveTab::Chart);

        assert_eq!(app.chart.series().income[0], 100.0);
        assert_eq!(app.chart.series().expense[2], 40.5);
    }

    #[test]
    fn test_refresh_overwrites_previous_series() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        app.income_inputs[0].content = "100".into();
        app.refresh_chart();
        assert_eq!(app.chart.series().income[0], 100.0);

        app.income_inputs[0].content = "junk".into();
        app.refresh_chart();
        assert_eq!(app.chart.series().income[0], 0.0);
    }

    #[test]
    fn test_submit_username_replaces_banner() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        app.username_input.content = "nope".into();
        app.submit_username();
        assert_eq!(app.banner.as_ref().unwrap().kind, BannerKind::Danger);

        // Corrected candidate flips the banner in place
        app.username_input.content = "Tes1@".into();
        app.submit_username();
        let banner = app.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert!(banner.message.contains("Tes1@"));
    }

    #[test]
    fn test_export_chart_reports_path() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        app.income_inputs[0].content = "250".into();
        app.export_chart();

        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with("Saved "), "unexpected status: {}", status);
        assert!(status.contains("budget-chart-"));
    }

    #[test]
    fn test_grid_navigation_bounds() {
        let (settings, paths, _guard) = fixtures();
        let mut app = App::new(&settings, &paths);

        app.move_up();
        assert_eq!(app.focused_row, 0);

        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.focused_row, MONTH_COUNT - 1);

        app.toggle_column();
        assert_eq!(app.focused_column, BudgetColumn::Expense);
    }
}
