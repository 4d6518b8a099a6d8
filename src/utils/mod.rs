//! Utility functions shared by the smoothing engines.

pub mod ols;
pub mod stats;

pub use ols::{linear_trend_seed, LinearTrend};
pub use stats::mean;
