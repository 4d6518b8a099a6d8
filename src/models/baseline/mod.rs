//! Baseline smoothing.
//!
//! Window-based methods with no recursive state.

mod sma;

pub use sma::{moving_average, SimpleMovingAverage, SmaBuilder};
