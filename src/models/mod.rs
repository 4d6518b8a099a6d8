//! Smoothing engines.

mod traits;

pub mod baseline;
pub mod exponential;

pub use traits::Smoother;
