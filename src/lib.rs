//! # tsmooth
//!
//! Classical recursive smoothing for a single univariate time series.
//!
//! Provides a trailing moving average, simple exponential smoothing, Holt's
//! linear trend and multiplicative Holt-Winters, along with the OLS trend
//! seed and seasonal-index bootstrap they are initialised from. Smoothing
//! constants are always supplied by the caller; nothing here fits them.
//!
//! Every engine is a pure function of its parameters and input: no I/O,
//! no shared state, output buffers sized up front. Seeds are computed from
//! the whole series (in-sample), so outputs describe the observed data
//! rather than simulate a forecaster that only saw the past.
//!
//! ```
//! use tsmooth::prelude::*;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(linear_trend_seed(&values).unwrap().slope, 1.0);
//! assert_eq!(holt(&values, 0.5, 0.5).unwrap()[5], 6.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use config::ParameterPolicy;
pub use error::{Result, SmoothingError};
pub use models::baseline::moving_average;
pub use models::exponential::{
    holt, holt_winters, seasonal_indices, simple_exponential_smoothing, AlphaSource,
};
pub use utils::ols::{linear_trend_seed, LinearTrend};

pub mod prelude {
    pub use crate::config::ParameterPolicy;
    pub use crate::error::{Result, SmoothingError};
    pub use crate::models::baseline::{moving_average, SimpleMovingAverage};
    pub use crate::models::exponential::{
        holt, holt_winters, simple_exponential_smoothing, AlphaSource, HoltFit, HoltLinearTrend,
        HoltWinters, HoltWintersFit, SesFit, SimpleExponentialSmoothing,
    };
    pub use crate::models::Smoother;
    pub use crate::utils::{linear_trend_seed, LinearTrend};
}
