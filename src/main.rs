use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_chart::cli::{
    handle_config_command, handle_export_command, handle_validate_command, ExportArgs,
};
use budget_chart::config::{paths::BudgetChartPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "budget-chart",
    version,
    about = "Terminal budget charting with PNG export",
    long_about = "budget-chart renders twelve months of income and expense \
                  figures as a grouped bar chart, exports the chart as a PNG \
                  image, and validates usernames against a fixed \
                  character-class rule."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Validate a username candidate
    Validate {
        /// The candidate to check
        candidate: String,
    },

    /// Render a chart PNG from command-line values
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetChartPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Validate { candidate }) => {
            if !handle_validate_command(&candidate) {
                std::process::exit(1);
            }
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, &paths, args)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&settings, &paths);
        }
        Some(Commands::Tui) | None => {
            budget_chart::tui::run_tui(&settings, &paths)?;
        }
    }

    Ok(())
}
