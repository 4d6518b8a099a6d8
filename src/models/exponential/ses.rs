//! Simple Exponential Smoothing (SES).
//!
//! SES is suitable for data with no clear trend or seasonality.

use crate::config::ParameterPolicy;
use crate::core::validate_values;
use crate::error::Result;
use crate::models::Smoother;
use crate::utils::stats::mean;

/// Where the smoothing constant of a fit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaSource {
    /// Supplied by the caller.
    Supplied,
    /// Defaulted to `2 / (1 + N)`. This is a heuristic, not an estimate.
    Default,
}

/// Simple Exponential Smoothing engine.
///
/// The model equation is:
/// `level[i+1] = α × y[i] + (1-α) × level[i]`
///
/// # In-sample seeding
///
/// `level[0]` is the mean of the *entire* series. This seed looks ahead at
/// observations the recursion has not consumed yet, which differs from the
/// convention of seeding with the first observation. Treat the output as an
/// in-sample decomposition, not as a sequence of out-of-sample forecasts.
///
/// # Example
/// ```
/// use tsmooth::models::exponential::{AlphaSource, SimpleExponentialSmoothing};
/// use tsmooth::models::Smoother;
///
/// let fit = SimpleExponentialSmoothing::new(0.5)
///     .smooth(&[10.0, 12.0, 14.0])
///     .unwrap();
/// assert_eq!(fit.levels(), &[12.0, 11.0, 11.5, 12.75]);
/// assert_eq!(fit.alpha_source(), AlphaSource::Supplied);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter. `None` means use the length-based default.
    alpha: Option<f64>,
    policy: ParameterPolicy,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES engine with a fixed smoothing parameter.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            policy: ParameterPolicy::default(),
        }
    }

    /// Create a new SES engine that uses `2 / (1 + N)` as alpha.
    pub fn with_default_alpha() -> Self {
        Self {
            alpha: None,
            policy: ParameterPolicy::default(),
        }
    }

    /// Set the validation policy for alpha.
    pub fn with_policy(mut self, policy: ParameterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the configured smoothing parameter.
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// The heuristic alpha used when none is supplied.
    pub fn default_alpha(n: usize) -> f64 {
        2.0 / (1.0 + n as f64)
    }
}

impl Default for SimpleExponentialSmoothing {
    fn default() -> Self {
        Self::with_default_alpha()
    }
}

/// Output of one SES pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SesFit {
    levels: Vec<f64>,
    alpha: f64,
    alpha_source: AlphaSource,
    residuals: Vec<f64>,
}

impl SesFit {
    /// Level sequence of length N + 1. Entry 0 is the pre-series seed.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Consume the fit and return the level sequence.
    pub fn into_levels(self) -> Vec<f64> {
        self.levels
    }

    /// The alpha actually used.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether alpha was supplied or defaulted.
    pub fn alpha_source(&self) -> AlphaSource {
        self.alpha_source
    }

    /// The level available before each observation, i.e. `levels[..N]`.
    pub fn fitted(&self) -> &[f64] {
        &self.levels[..self.levels.len() - 1]
    }

    /// `y[i] - levels[i]` for each observation.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Flat projection at the final level.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let last = self.levels[self.levels.len() - 1];
        vec![last; horizon]
    }
}

impl Smoother for SimpleExponentialSmoothing {
    type Output = SesFit;

    fn smooth(&self, values: &[f64]) -> Result<SesFit> {
        validate_values(values)?;

        let n = values.len();
        let (alpha, alpha_source) = match self.alpha {
            Some(alpha) => (alpha, AlphaSource::Supplied),
            None => {
                let alpha = Self::default_alpha(n);
                tracing::info!(alpha, n, "alpha not supplied, using 2/(1+N)");
                (alpha, AlphaSource::Default)
            }
        };
        self.policy.check("alpha", alpha)?;

        let mut levels = vec![0.0; n + 1];
        let mut residuals = vec![0.0; n];
        levels[0] = mean(values);

        for (i, &y) in values.iter().enumerate() {
            residuals[i] = y - levels[i];
            levels[i + 1] = levels[i] + alpha * residuals[i];
        }

        Ok(SesFit {
            levels,
            alpha,
            alpha_source,
            residuals,
        })
    }

    fn name(&self) -> &str {
        "SimpleExponentialSmoothing"
    }
}

/// Simple exponential smoothing with an optional alpha.
///
/// When `alpha` is `None` it defaults to `2 / (1 + N)`; the returned fit
/// reports this through [`SesFit::alpha_source`] and an `info` tracing event
/// is emitted. See [`SimpleExponentialSmoothing`] for the in-sample seed.
///
/// # Example
/// ```
/// use tsmooth::{simple_exponential_smoothing, AlphaSource};
///
/// let fit = simple_exponential_smoothing(&[1.0, 2.0, 3.0], None).unwrap();
/// assert_eq!(fit.alpha(), 0.5);
/// assert_eq!(fit.alpha_source(), AlphaSource::Default);
/// assert_eq!(fit.levels().len(), 4);
/// ```
pub fn simple_exponential_smoothing(values: &[f64], alpha: Option<f64>) -> Result<SesFit> {
    let engine = match alpha {
        Some(alpha) => SimpleExponentialSmoothing::new(alpha),
        None => SimpleExponentialSmoothing::with_default_alpha(),
    };
    engine.smooth(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmoothingError;
    use approx::assert_relative_eq;

    #[test]
    fn ses_seed_is_series_mean() {
        let values = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0];
        let fit = simple_exponential_smoothing(&values, Some(0.3)).unwrap();
        assert_relative_eq!(fit.levels()[0], mean(&values), epsilon = 1e-12);
        assert_eq!(fit.levels().len(), values.len() + 1);
    }

    #[test]
    fn ses_known_calculation() {
        // l_0 = mean = 12.25
        // l_1 = 0.5*10 + 0.5*12.25 = 11.125
        // l_2 = 0.5*12 + 0.5*11.125 = 11.5625
        // l_3 = 0.5*14 + 0.5*11.5625 = 12.78125
        // l_4 = 0.5*13 + 0.5*12.78125 = 12.890625
        let fit = simple_exponential_smoothing(&[10.0, 12.0, 14.0, 13.0], Some(0.5)).unwrap();
        let expected = [12.25, 11.125, 11.5625, 12.78125, 12.890625];
        for (got, want) in fit.levels().iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn ses_constant_series_is_fixed_point() {
        let fit = simple_exponential_smoothing(&[10.0, 10.0, 10.0], Some(0.5)).unwrap();
        for level in fit.levels() {
            assert_relative_eq!(*level, 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn ses_levels_stay_finite_near_max() {
        let fit = simple_exponential_smoothing(&[f64::MAX, f64::MAX], Some(0.3)).unwrap();
        for level in fit.levels() {
            assert_eq!(*level, f64::MAX);
        }
    }

    #[test]
    fn ses_default_alpha_is_reported() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let fit = simple_exponential_smoothing(&values, None).unwrap();
        assert_relative_eq!(fit.alpha(), 0.4, epsilon = 1e-12);
        assert_eq!(fit.alpha_source(), AlphaSource::Default);

        let fit = simple_exponential_smoothing(&values, Some(0.4)).unwrap();
        assert_eq!(fit.alpha_source(), AlphaSource::Supplied);
    }

    #[test]
    fn ses_fitted_and_residuals_align() {
        let values = vec![10.0, 12.0, 11.0, 13.0, 14.0];
        let fit = simple_exponential_smoothing(&values, Some(0.3)).unwrap();

        let fitted = fit.fitted();
        let residuals = fit.residuals();
        assert_eq!(fitted.len(), values.len());
        for i in 0..values.len() {
            assert_relative_eq!(residuals[i], values[i] - fitted[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn ses_forecast_is_flat_at_last_level() {
        let fit = simple_exponential_smoothing(&[1.0, 5.0, 2.0, 8.0], Some(0.3)).unwrap();
        let last = *fit.levels().last().unwrap();
        let forecast = fit.forecast(3);
        assert_eq!(forecast, vec![last; 3]);
        assert!(fit.forecast(0).is_empty());
    }

    #[test]
    fn ses_single_observation() {
        let fit = simple_exponential_smoothing(&[4.0], Some(0.7)).unwrap();
        assert_eq!(fit.levels().len(), 2);
        assert_relative_eq!(fit.levels()[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(fit.levels()[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn ses_alpha_is_not_clamped_when_permissive() {
        let fit = simple_exponential_smoothing(&[1.0, 2.0], Some(1.5)).unwrap();
        assert_eq!(fit.alpha(), 1.5);
    }

    #[test]
    fn ses_strict_policy_rejects_alpha() {
        let engine = SimpleExponentialSmoothing::new(0.0).with_policy(ParameterPolicy::Strict);
        assert!(matches!(
            engine.smooth(&[1.0, 2.0]),
            Err(SmoothingError::InvalidParameter(_))
        ));

        // The default heuristic always lies in (0, 1].
        let engine =
            SimpleExponentialSmoothing::with_default_alpha().with_policy(ParameterPolicy::Strict);
        assert!(engine.smooth(&[1.0]).is_ok());
    }

    #[test]
    fn ses_empty_data_returns_error() {
        assert!(matches!(
            simple_exponential_smoothing(&[], Some(0.3)),
            Err(SmoothingError::EmptyData)
        ));
    }

    #[test]
    fn ses_high_alpha_responds_quickly() {
        let values = vec![10.0, 10.0, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0, 20.0, 20.0];

        let low = simple_exponential_smoothing(&values, Some(0.1)).unwrap();
        let high = simple_exponential_smoothing(&values, Some(0.9)).unwrap();

        assert!(high.levels().last().unwrap() > low.levels().last().unwrap());
    }

    #[test]
    fn ses_name_and_default() {
        let model = SimpleExponentialSmoothing::default();
        assert_eq!(model.name(), "SimpleExponentialSmoothing");
        assert!(model.alpha().is_none());
    }
}
