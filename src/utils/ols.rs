//! Ordinary Least Squares trend fit used to seed level and trend.
//!
//! Holt and Holt-Winters both start their recursions from a straight line
//! fitted to the whole series, regressing the values on the 1-based time
//! index `x = 1..=N`. The intercept becomes the initial level and the slope
//! the initial trend.
//!
//! This is an in-sample seed: it uses every observation, including ones the
//! recursion has not reached yet.

use crate::core::validate_values;
use crate::error::{Result, SmoothingError};
use crate::utils::stats::mean;

/// Intercept and slope of `y = intercept + slope * x` over `x = 1..=N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    /// Fitted value at `x = 0`, one step before the first observation.
    pub intercept: f64,
    /// Per-step change.
    pub slope: f64,
}

impl LinearTrend {
    /// Evaluate the fitted line at index `x` (1-based like the regression).
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `y = b0 + b1 * x` by OLS with `x = 1..=N`.
///
/// # Errors
/// * `EmptyData` / `MissingValues` for unusable input
/// * `InsufficientData` when fewer than two observations are given
/// * `NumericDegeneracy` if the index variance is zero
///
/// # Example
/// ```
/// use tsmooth::linear_trend_seed;
///
/// let trend = linear_trend_seed(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(trend.intercept, 0.0);
/// assert_eq!(trend.slope, 1.0);
/// ```
pub fn linear_trend_seed(values: &[f64]) -> Result<LinearTrend> {
    validate_values(values)?;

    let n = values.len();
    if n < 2 {
        return Err(SmoothingError::InsufficientData { needed: 2, got: n });
    }

    let x_mean = (n as f64 + 1.0) / 2.0;
    let y_mean = mean(values);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = (i + 1) as f64 - x_mean;
        sxx += dx * dx;
        sxy += dx * (y - y_mean);
    }

    if sxx == 0.0 {
        return Err(SmoothingError::NumericDegeneracy(
            "zero variance in regression index".into(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    tracing::debug!(n, intercept, slope, "linear trend seed");

    Ok(LinearTrend { intercept, slope })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_line_recovers_exact_coefficients() {
        let trend = linear_trend_seed(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(trend.intercept, 0.0, epsilon = 1e-12);
        assert_relative_eq!(trend.slope, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn index_is_one_based() {
        // y = 10 + 2x evaluated at x = 1..=4
        let values = vec![12.0, 14.0, 16.0, 18.0];
        let trend = linear_trend_seed(&values).unwrap();
        assert_relative_eq!(trend.intercept, 10.0, epsilon = 1e-10);
        assert_relative_eq!(trend.slope, 2.0, epsilon = 1e-10);
        assert_relative_eq!(trend.value_at(1.0), 12.0, epsilon = 1e-10);
    }

    #[test]
    fn noisy_known_fit() {
        // x = 1,2,3; y = 1,3,2 => slope 0.5, intercept 1.0
        let trend = linear_trend_seed(&[1.0, 3.0, 2.0]).unwrap();
        assert_relative_eq!(trend.slope, 0.5, epsilon = 1e-12);
        assert_relative_eq!(trend.intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_has_zero_slope() {
        let trend = linear_trend_seed(&[7.0; 6]).unwrap();
        assert_relative_eq!(trend.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(trend.intercept, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn requires_two_points() {
        assert_eq!(
            linear_trend_seed(&[1.0]),
            Err(SmoothingError::InsufficientData { needed: 2, got: 1 })
        );
        assert_eq!(linear_trend_seed(&[]), Err(SmoothingError::EmptyData));
    }

    #[test]
    fn rejects_missing_values() {
        assert_eq!(
            linear_trend_seed(&[1.0, f64::NAN, 3.0]),
            Err(SmoothingError::MissingValues)
        );
    }
}
