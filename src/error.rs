//! Error types for the tsmooth library.

use thiserror::Error;

/// Result type alias for smoothing operations.
pub type Result<T> = std::result::Result<T, SmoothingError>;

/// Errors that can occur while validating input or running an engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Non-finite values (NaN or infinite) detected in the input.
    #[error("missing values detected in data")]
    MissingValues,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A divisor that the algorithm relies on is zero.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}
