//! Holt's Linear Trend smoothing.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::config::ParameterPolicy;
use crate::error::Result;
use crate::models::Smoother;
use crate::utils::ols::{linear_trend_seed, LinearTrend};

/// Holt's Linear Trend engine.
///
/// The model equations are:
/// - Level: `l[i+1] = α × y[i] + (1-α) × (l[i] + b[i])`
/// - Trend: `b[i+1] = β × (l[i+1] - l[i]) + (1-β) × b[i]`
/// - Forecast: `f[i+1] = l[i+1] + b[i+1]`
///
/// `l[0]` and `b[0]` are the intercept and slope of an OLS line fitted to
/// the whole series (an in-sample seed), and `f[0] = l[0] + b[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltLinearTrend {
    /// Level smoothing parameter.
    alpha: f64,
    /// Trend smoothing parameter.
    beta: f64,
    policy: ParameterPolicy,
}

impl HoltLinearTrend {
    /// Create a new Holt engine with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter, conventionally in (0, 1]
    /// * `beta` - Trend smoothing parameter, conventionally in (0, 1]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            policy: ParameterPolicy::default(),
        }
    }

    /// Set the validation policy for alpha and beta.
    pub fn with_policy(mut self, policy: ParameterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Output of one Holt pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltFit {
    seed: LinearTrend,
    levels: Vec<f64>,
    trends: Vec<f64>,
    forecasts: Vec<f64>,
    residuals: Vec<f64>,
}

impl HoltFit {
    /// The OLS line that seeded `levels[0]` and `trends[0]`.
    pub fn seed(&self) -> LinearTrend {
        self.seed
    }

    /// Level sequence of length N + 1. Entry 0 is the seed.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Trend sequence of length N + 1. Entry 0 is the seed.
    pub fn trends(&self) -> &[f64] {
        &self.trends
    }

    /// Forecast sequence of length N + 1.
    ///
    /// `forecasts[0]` projects the seed one step. `forecasts[i + 1]` is
    /// produced by the update that absorbs `y[i]` and targets the step after
    /// it, so `forecasts[i]` is the one-step prediction of `y[i]` and
    /// `forecasts[N]` is the first out-of-sample value.
    pub fn forecasts(&self) -> &[f64] {
        &self.forecasts
    }

    /// Consume the fit and return the forecast sequence.
    pub fn into_forecasts(self) -> Vec<f64> {
        self.forecasts
    }

    /// `y[i] - forecasts[i]` for each observation.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Project `l[N] + h × b[N]` for `h = 1..=horizon`.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let level = self.levels[self.levels.len() - 1];
        let trend = self.trends[self.trends.len() - 1];
        (1..=horizon).map(|h| level + h as f64 * trend).collect()
    }
}

impl Smoother for HoltLinearTrend {
    type Output = HoltFit;

    fn smooth(&self, values: &[f64]) -> Result<HoltFit> {
        self.policy
            .check_all(&[("alpha", self.alpha), ("beta", self.beta)])?;
        let seed = linear_trend_seed(values)?;

        let n = values.len();
        let (alpha, beta) = (self.alpha, self.beta);

        let mut levels = vec![0.0; n + 1];
        let mut trends = vec![0.0; n + 1];
        let mut forecasts = vec![0.0; n + 1];
        let mut residuals = vec![0.0; n];

        levels[0] = seed.intercept;
        trends[0] = seed.slope;
        forecasts[0] = levels[0] + trends[0];

        for (i, &y) in values.iter().enumerate() {
            residuals[i] = y - forecasts[i];
            levels[i + 1] = alpha * y + (1.0 - alpha) * (levels[i] + trends[i]);
            trends[i + 1] = beta * (levels[i + 1] - levels[i]) + (1.0 - beta) * trends[i];
            forecasts[i + 1] = levels[i + 1] + trends[i + 1];
        }

        Ok(HoltFit {
            seed,
            levels,
            trends,
            forecasts,
            residuals,
        })
    }

    fn name(&self) -> &str {
        "HoltLinearTrend"
    }
}

/// Holt's linear trend smoothing; returns the N + 1 forecasts.
///
/// See [`HoltFit::forecasts`] for the index alignment.
///
/// # Example
/// ```
/// use tsmooth::holt;
///
/// let forecasts = holt(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5, 0.5).unwrap();
/// assert_eq!(forecasts, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn holt(values: &[f64], alpha: f64, beta: f64) -> Result<Vec<f64>> {
    HoltLinearTrend::new(alpha, beta)
        .smooth(values)
        .map(HoltFit::into_forecasts)
}
