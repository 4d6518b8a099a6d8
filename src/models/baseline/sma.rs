//! Simple Moving Average.
//!
//! Trailing, unweighted, non-centred window: the value at index `i` is the
//! mean of the `window` observations ending at `i`. The first `window - 1`
//! positions have insufficient history and are reported as `None`.

use crate::core::validate_values;
use crate::error::{Result, SmoothingError};
use crate::models::Smoother;
use crate::utils::stats::mean;

/// Simple Moving Average engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleMovingAverage {
    window: usize,
}

/// Builder for SimpleMovingAverage.
#[derive(Debug, Clone, Default)]
pub struct SmaBuilder {
    window: usize,
}

impl SmaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Build the engine. A zero window is rejected here; the upper bound
    /// depends on the series and is checked by [`Smoother::smooth`].
    pub fn build(self) -> Result<SimpleMovingAverage> {
        if self.window == 0 {
            return Err(SmoothingError::InvalidParameter(
                "window must be at least 1".to_string(),
            ));
        }
        Ok(SimpleMovingAverage::new(self.window))
    }
}

impl SimpleMovingAverage {
    /// Create a new SMA with the given window size.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Create a builder that validates the window eagerly.
    pub fn builder() -> SmaBuilder {
        SmaBuilder::new()
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Smoother for SimpleMovingAverage {
    type Output = Vec<Option<f64>>;

    fn smooth(&self, values: &[f64]) -> Result<Vec<Option<f64>>> {
        validate_values(values)?;

        let n = values.len();
        let window = self.window;
        if window < 1 {
            return Err(SmoothingError::InvalidParameter(
                "window must be at least 1".to_string(),
            ));
        }
        if window > n {
            return Err(SmoothingError::InvalidParameter(format!(
                "window {} exceeds series length {}",
                window, n
            )));
        }

        let mut averages = vec![None; n];
        for (i, slot) in averages.iter_mut().enumerate().skip(window - 1) {
            let start = i + 1 - window;
            *slot = Some(mean(&values[start..=i]));
        }

        Ok(averages)
    }

    fn name(&self) -> &str {
        "SimpleMovingAverage"
    }
}

/// Trailing moving average of `values` over `window` observations.
///
/// Returns one entry per observation; entries `0..window - 1` are `None`.
///
/// # Errors
/// `InvalidParameter` when `window` is 0 or larger than the series.
///
/// # Example
/// ```
/// use tsmooth::moving_average;
///
/// let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    SimpleMovingAverage::new(window).smooth(values)
}
