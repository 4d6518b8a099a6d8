//! Input validation shared by every engine.

use crate::error::{Result, SmoothingError};

/// Check that a sequence is usable by the smoothing engines.
///
/// Every engine runs this before doing any arithmetic: the input must be
/// non-empty and every value finite. Missing observations are not repaired.
///
/// # Example
/// ```
/// use tsmooth::core::validate_values;
/// use tsmooth::SmoothingError;
///
/// assert!(validate_values(&[1.0, 2.0]).is_ok());
/// assert_eq!(validate_values(&[1.0, f64::NAN]), Err(SmoothingError::MissingValues));
/// ```
pub fn validate_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(SmoothingError::EmptyData);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SmoothingError::MissingValues);
    }
    Ok(())
}
