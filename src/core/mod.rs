//! Core input checks shared by all engines.

mod validate;

pub use validate::validate_values;
