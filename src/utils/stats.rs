//! Statistical utility functions.

/// Calculate the mean of a slice.
///
/// Accumulated as a running mean, so finite inputs near `f64::MAX` give a
/// finite result.
///
/// # Example
/// ```
/// use tsmooth::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values
        .iter()
        .enumerate()
        .fold(0.0, |m, (k, &x)| m + (x - m) / (k + 1) as f64)
}
