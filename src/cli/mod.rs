//! Command-line interface for budget-chart
//!
//! Handlers for the non-interactive subcommands. The TUI covers the
//! interactive flows; these cover scripting: validating a username and
//! rendering a chart PNG straight from command-line values.

use clap::Args;
use std::path::PathBuf;

use crate::budget::aggregate;
use crate::chart::ChartState;
use crate::config::{BudgetChartPaths, Settings};
use crate::error::BudgetChartResult;
use crate::export::{export_chart_png, export_to_dir};
use crate::validate::validate;

/// Arguments for the `export` subcommand
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Income values in month order, Jan first (repeat up to 12 times)
    #[arg(long = "income", value_name = "AMOUNT")]
    pub incomes: Vec<String>,

    /// Expense values in month order, Jan first (repeat up to 12 times)
    #[arg(long = "expense", value_name = "AMOUNT")]
    pub expenses: Vec<String>,

    /// Output file path (defaults to a dated file in the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Validate a username candidate and print the outcome message.
///
/// Returns whether the candidate was accepted, so `main` can pick the
/// process exit code.
pub fn handle_validate_command(candidate: &str) -> bool {
    let result = validate(candidate);
    println!("{}", result.message());
    result.is_valid()
}

/// Render a chart PNG from command-line values
pub fn handle_export_command(
    settings: &Settings,
    paths: &BudgetChartPaths,
    args: ExportArgs,
) -> BudgetChartResult<PathBuf> {
    let mut chart = ChartState::new();
    chart.update(aggregate(&args.incomes, &args.expenses));

    let written = match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            export_chart_png(&chart, &path)?;
            path
        }
        None => export_to_dir(&chart, &settings.resolve_export_dir(paths))?,
    };

    println!("Wrote {}", written.display());
    Ok(written)
}

/// Print resolved configuration and paths
pub fn handle_config_command(settings: &Settings, paths: &BudgetChartPaths) {
    println!("budget-chart Configuration");
    println!("==========================");
    println!("Config directory: {}", paths.config_dir().display());
    println!(
        "Export directory: {}",
        settings.resolve_export_dir(paths).display()
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
}
