//! User settings for budget-chart
//!
//! Manages user preferences: the currency symbol used for chart labels and
//! an optional override for where exported images land.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::BudgetChartPaths;
use crate::error::BudgetChartError;

/// User settings for budget-chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to chart values
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where exported chart images are written (defaults to the exports
    /// directory under the config base)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Resolve the directory exported charts should be written to
    pub fn resolve_export_dir(&self, paths: &BudgetChartPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetChartPaths) -> Result<Self, BudgetChartError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetChartError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetChartError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetChartPaths) -> Result<(), BudgetChartError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetChartError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetChartError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
