//! Axis scale computation
//!
//! Derives a "nice" y-axis upper bound and tick step from the series
//! maximum so the terminal chart and the PNG export draw the same
//! gridlines. The axis always begins at zero.

/// A computed y-axis scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Top of the axis; at or above the series maximum
    pub upper: f64,
    /// Distance between gridlines; divides `upper` evenly
    pub step: f64,
}

impl Scale {
    /// Gridline values from zero up to and including the upper bound
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.upper / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

/// Compute a nice scale for a series maximum.
///
/// The step is the smallest of 1, 2, 5, or 10 times a power of ten that
/// covers the maximum in at most five steps. An empty chart (max <= 0)
/// gets a fixed 0..100 axis so the frame still renders.
pub fn nice_scale(max: f64) -> Scale {
    if !(max > 0.0) {
        return Scale {
            upper: 100.0,
            step: 25.0,
        };
    }

    let raw_step = max / 5.0;
    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;

    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step = nice * magnitude;
    let upper = step * (max / step).ceil();
    Scale { upper, step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart_gets_default_axis() {
        let scale = nice_scale(0.0);
        assert_eq!(scale.upper, 100.0);
        assert_eq!(scale.step, 25.0);
        assert_eq!(nice_scale(-5.0), scale);
    }

    #[test]
    fn test_upper_covers_max() {
        for max in [1.0, 7.3, 99.0, 450.0, 1234.5, 98765.0] {
            let scale = nice_scale(max);
            assert!(scale.upper >= max, "upper {} < max {}", scale.upper, max);
            assert!(scale.step > 0.0);
        }
    }

    #[test]
    fn test_round_numbers() {
        let scale = nice_scale(1000.0);
        assert_eq!(scale.upper, 1000.0);
        assert_eq!(scale.step, 200.0);
    }

    #[test]
    fn test_ticks_include_bounds() {
        let scale = nice_scale(450.0);
        let ticks = scale.ticks();
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(scale.upper));
        // Steps are uniform
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - scale.step).abs() < 1e-9);
        }
    }
}
