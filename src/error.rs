//! Custom error types for budget-chart
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget-chart operations
#[derive(Error, Debug)]
pub enum BudgetChartError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Chart image export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetChartError {
    /// Create an export error from anything displayable
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetChartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<image::ImageError> for BudgetChartError {
    fn from(err: image::ImageError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget-chart operations
pub type BudgetChartResult<T> = Result<T, BudgetChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetChartError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_export_helper() {
        let err = BudgetChartError::export("encode failed");
        assert_eq!(err.to_string(), "Export error: encode failed");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let chart_err: BudgetChartError = io_err.into();
        assert!(matches!(chart_err, BudgetChartError::Io(_)));
    }

}
