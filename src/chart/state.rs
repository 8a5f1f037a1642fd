//! Owned chart state
//!
//! The chart handle is passed explicitly to whatever renders it (the TUI
//! view or the PNG exporter); there is no global chart object. Each update
//! replaces the held series wholesale with the latest aggregation.

use crate::models::BudgetSeries;

use super::scale::{nice_scale, Scale};

/// The single chart-state handle: the last computed series
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    series: BudgetSeries,
}

impl ChartState {
    /// Create a chart with an all-zero series
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held series with a fresh aggregation (last writer wins)
    pub fn update(&mut self, series: BudgetSeries) {
        self.series = series;
    }

    /// The currently held series
    pub fn series(&self) -> &BudgetSeries {
        &self.series
    }

    /// The y-axis scale for the current series
    pub fn scale(&self) -> Scale {
        nice_scale(self.series.max_value())
    }

    /// True if no non-zero value has been charted yet
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
