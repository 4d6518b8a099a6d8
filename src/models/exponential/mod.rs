//! Exponential smoothing models.
//!
//! This module provides the recursive smoothing engines:
//! - Simple Exponential Smoothing (SES)
//! - Holt's Linear Trend
//! - Holt-Winters (multiplicative seasonality)

mod holt;
mod holt_winters;
mod ses;

pub use holt::{holt, HoltFit, HoltLinearTrend};
pub use holt_winters::{holt_winters, seasonal_indices, HoltWinters, HoltWintersFit};
pub use ses::{simple_exponential_smoothing, AlphaSource, SesFit, SimpleExponentialSmoothing};
