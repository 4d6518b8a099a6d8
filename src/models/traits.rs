//! Smoother trait defining the common interface for all engines.

use crate::error::Result;

/// Common interface for the smoothing engines.
///
/// An engine holds only its parameters; `smooth` is a pure function of
/// those parameters and the input, so the same engine can be applied to
/// any number of series and repeated calls give identical results.
///
/// # Example
///
/// ```
/// use tsmooth::models::Smoother;
/// use tsmooth::models::baseline::SimpleMovingAverage;
///
/// let sma = SimpleMovingAverage::new(2);
/// let out = sma.smooth(&[1.0, 3.0, 5.0]).unwrap();
/// assert_eq!(out, vec![None, Some(2.0), Some(4.0)]);
/// assert_eq!(sma.name(), "SimpleMovingAverage");
/// ```
pub trait Smoother {
    /// What one pass over a series produces.
    type Output;

    /// Run the engine over `values`.
    fn smooth(&self, values: &[f64]) -> Result<Self::Output>;

    /// Get the engine name.
    fn name(&self) -> &str;
}
