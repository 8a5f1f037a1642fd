//! Path management for budget-chart
//!
//! Provides XDG-compliant path resolution for configuration and chart
//! exports.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_CHART_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-chart` or `~/.config/budget-chart`
//! 3. Windows: `%APPDATA%\budget-chart`

use std::path::PathBuf;

use crate::error::BudgetChartError;

/// Manages all paths used by budget-chart
#[derive(Debug, Clone)]
pub struct BudgetChartPaths {
    /// Base directory for all budget-chart data
    base_dir: PathBuf,
}

impl BudgetChartPaths {
    /// Create a new BudgetChartPaths instance
    ///
    /// Path resolution:
    /// 1. `BUDGET_CHART_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/budget-chart` or `~/.config/budget-chart`
    /// 3. Windows: `%APPDATA%\budget-chart`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetChartError> {
        let base_dir = if let Ok(custom) = std::env::var("BUDGET_CHART_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetChartPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budget-chart/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the default directory for exported chart images
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/budget-chart/)
    /// - Export directory (~/.config/budget-chart/exports/)
    pub fn ensure_directories(&self) -> Result<(), BudgetChartError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetChartError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            BudgetChartError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetChartError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| BudgetChartError::Config("Could not determine home directory".into()))?;
    Ok(config_base.join("budget-chart"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetChartError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetChartError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-chart"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetChartPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetChartPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
