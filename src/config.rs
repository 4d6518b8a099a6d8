//! Validation policy for smoothing constants.
//!
//! Smoothing constants are conventionally in `(0, 1]`, but nothing in the
//! recursions requires it: values outside that range are accepted and
//! simply produce divergent or oscillating output. Whether to reject them
//! is left to the caller.

use crate::error::{Result, SmoothingError};

/// How engines treat smoothing constants (alpha, beta, gamma).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterPolicy {
    /// Accept any value as-is. Nothing is clamped.
    #[default]
    Permissive,
    /// Reject constants that are non-finite or outside `(0, 1]`.
    Strict,
}

impl ParameterPolicy {
    /// Check a named smoothing constant against this policy.
    ///
    /// # Example
    /// ```
    /// use tsmooth::config::ParameterPolicy;
    ///
    /// assert!(ParameterPolicy::Strict.check("alpha", 1.0).is_ok());
    /// assert!(ParameterPolicy::Strict.check("alpha", 0.0).is_err());
    /// assert!(ParameterPolicy::Permissive.check("alpha", 1.5).is_ok());
    /// ```
    pub fn check(self, name: &str, value: f64) -> Result<()> {
        match self {
            ParameterPolicy::Permissive => Ok(()),
            ParameterPolicy::Strict => {
                if value.is_finite() && value > 0.0 && value <= 1.0 {
                    Ok(())
                } else {
                    Err(SmoothingError::InvalidParameter(format!(
                        "{} must be in (0, 1], got {}",
                        name, value
                    )))
                }
            }
        }
    }

    /// Check several named constants, stopping at the first rejection.
    pub fn check_all(self, constants: &[(&str, f64)]) -> Result<()> {
        for &(name, value) in constants {
            self.check(name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        assert_eq!(ParameterPolicy::default(), ParameterPolicy::Permissive);
    }

    #[test]
    fn permissive_accepts_anything() {
        let policy = ParameterPolicy::Permissive;
        for value in [-1.0, 0.0, 0.5, 1.0, 2.0, f64::NAN, f64::INFINITY] {
            assert!(policy.check("alpha", value).is_ok());
        }
    }

    #[test]
    fn strict_accepts_half_open_unit_interval() {
        let policy = ParameterPolicy::Strict;
        assert!(policy.check("alpha", 1e-9).is_ok());
        assert!(policy.check("alpha", 0.5).is_ok());
        assert!(policy.check("alpha", 1.0).is_ok());
    }

    #[test]
    fn strict_rejects_out_of_range_and_non_finite() {
        let policy = ParameterPolicy::Strict;
        for value in [0.0, -0.1, 1.0001, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                policy.check("beta", value),
                Err(SmoothingError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn check_all_names_the_offending_constant() {
        let err = ParameterPolicy::Strict
            .check_all(&[("alpha", 0.3), ("beta", 0.2), ("gamma", 1.5)])
            .unwrap_err();
        match err {
            SmoothingError::InvalidParameter(msg) => assert!(msg.starts_with("gamma")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
