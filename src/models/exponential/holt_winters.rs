//! Holt-Winters smoothing with multiplicative seasonality.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and a repeating seasonal pattern whose amplitude
//! scales with the level.

use crate::config::ParameterPolicy;
use crate::core::validate_values;
use crate::error::{Result, SmoothingError};
use crate::models::Smoother;
use crate::utils::ols::{linear_trend_seed, LinearTrend};
use crate::utils::stats::mean;

/// Holt-Winters engine (multiplicative seasonality).
///
/// With `s*[i]` the seasonal index live at step `i` (the bootstrap index
/// for the first cycle, then the most recent update of the same phase):
/// - Level: `l[i+1] = α(y[i] / s*[i]) + (1-α)(l[i] + b[i])`
/// - Trend: `b[i+1] = β(l[i+1] - l[i]) + (1-β)b[i]`
/// - Seasonal (from the second cycle on): `s[i] = γ(y[i] / l[i+1]) + (1-γ)s*[i]`
/// - Forecast: `f[i] = (l[i] + b[i]) × s*[i]`
///
/// Level and trend are seeded by an OLS line over the whole series, and the
/// initial seasonal indices are averaged over every complete cycle. Both are
/// in-sample seeds.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWinters {
    /// Seasonal period.
    period: usize,
    /// Level smoothing parameter.
    alpha: f64,
    /// Trend smoothing parameter.
    beta: f64,
    /// Seasonal smoothing parameter.
    gamma: f64,
    policy: ParameterPolicy,
}

impl HoltWinters {
    /// Create a new Holt-Winters engine.
    pub fn new(period: usize, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            period,
            alpha,
            beta,
            gamma,
            policy: ParameterPolicy::default(),
        }
    }

    /// Set the validation policy for alpha, beta and gamma.
    pub fn with_policy(mut self, policy: ParameterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get the seasonal smoothing parameter.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

fn check_period(period: usize, n: usize) -> Result<()> {
    if period < 2 {
        return Err(SmoothingError::InvalidParameter(format!(
            "seasonal period must be at least 2, got {}",
            period
        )));
    }
    if period > n {
        return Err(SmoothingError::InvalidParameter(format!(
            "seasonal period {} exceeds series length {}: no complete cycle",
            period, n
        )));
    }
    Ok(())
}

/// Initial multiplicative seasonal indices from the complete cycles.
///
/// The series is cut into `r = N / period` consecutive blocks (a trailing
/// partial block is ignored). Each observation is divided by its own block's
/// mean, and the index for phase `j` is the average of those ratios over
/// the `r` blocks. The result is not renormalised to average exactly 1.
///
/// # Errors
/// * `InvalidParameter` if `period < 2` or `period > N`
/// * `NumericDegeneracy` if a block mean or a resulting index is zero
///
/// # Example
/// ```
/// use tsmooth::seasonal_indices;
///
/// let idx = seasonal_indices(&[1.0, 3.0, 2.0, 6.0], 2).unwrap();
/// assert_eq!(idx, vec![0.5, 1.5]);
/// ```
pub fn seasonal_indices(values: &[f64], period: usize) -> Result<Vec<f64>> {
    validate_values(values)?;
    check_period(period, values.len())?;
    bootstrap_indices(values, period)
}

fn bootstrap_indices(values: &[f64], period: usize) -> Result<Vec<f64>> {
    let blocks = values.len() / period;
    if blocks == 1 {
        tracing::warn!(
            period,
            n = values.len(),
            "only one complete seasonal cycle; initial indices are single raw ratios"
        );
    }

    let mut block_means = vec![0.0; blocks];
    for (block, slot) in block_means.iter_mut().enumerate() {
        let start = block * period;
        let block_mean = mean(&values[start..start + period]);
        if block_mean == 0.0 {
            return Err(SmoothingError::NumericDegeneracy(format!(
                "seasonal block {} has zero mean",
                block
            )));
        }
        *slot = block_mean;
    }

    let mut indices = vec![0.0; period];
    for (phase, index) in indices.iter_mut().enumerate() {
        let mut ratio_sum = 0.0;
        for (block, &block_mean) in block_means.iter().enumerate() {
            ratio_sum += values[block * period + phase] / block_mean;
        }
        *index = ratio_sum / blocks as f64;
        if *index == 0.0 {
            return Err(SmoothingError::NumericDegeneracy(format!(
                "initial seasonal index for phase {} is zero",
                phase
            )));
        }
    }

    tracing::debug!(period, blocks, ?indices, "bootstrapped seasonal indices");
    Ok(indices)
}

/// Output of one Holt-Winters pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersFit {
    period: usize,
    seed: LinearTrend,
    initial_seasonals: Vec<f64>,
    levels: Vec<f64>,
    trends: Vec<f64>,
    seasonals: Vec<f64>,
    forecasts: Vec<f64>,
    residuals: Vec<f64>,
}

impl HoltWintersFit {
    /// Seasonal period the fit was computed with.
    pub fn period(&self) -> usize {
        self.period
    }

    /// The OLS line that seeded `levels[0]` and `trends[0]`.
    pub fn seed(&self) -> LinearTrend {
        self.seed
    }

    /// Bootstrap seasonal indices, one per phase.
    pub fn initial_seasonals(&self) -> &[f64] {
        &self.initial_seasonals
    }

    /// Level sequence of length N + 1. Entry 0 is the seed.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Trend sequence of length N + 1. Entry 0 is the seed.
    pub fn trends(&self) -> &[f64] {
        &self.trends
    }

    /// Seasonal index for each step after that step's update (length N).
    ///
    /// The first `period` entries equal the bootstrap indices.
    pub fn seasonals(&self) -> &[f64] {
        &self.seasonals
    }

    /// Latest seasonal index for each phase `0..period`.
    pub fn final_seasonals(&self) -> Vec<f64> {
        let n = self.seasonals.len();
        let mut last = vec![0.0; self.period];
        for i in n - self.period..n {
            last[i % self.period] = self.seasonals[i];
        }
        last
    }

    /// One-step forecasts `(l[i] + b[i]) × s*[i]`, one per observation.
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

    /// Project `(l[N] + h × b[N]) × s[phase]` for `h = 1..=horizon`.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let n = self.seasonals.len();
        let level = self.levels[n];
        let trend = self.trends[n];
        let phases = self.final_seasonals();
        (1..=horizon)
            .map(|h| (level + h as f64 * trend) * phases[(n + h - 1) % self.period])
            .collect()
    }
}

impl Smoother for HoltWinters {
    type Output = HoltWintersFit;

    fn smooth(&self, values: &[f64]) -> Result<HoltWintersFit> {
        validate_values(values)?;

        let n = values.len();
        let period = self.period;
        check_period(period, n)?;
        self.policy.check_all(&[
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ])?;

        let seed = linear_trend_seed(values)?;
        let initial_seasonals = bootstrap_indices(values, period)?;
        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);

        let mut levels = vec![0.0; n + 1];
        let mut trends = vec![0.0; n + 1];
        let mut seasonals = vec![0.0; n];
        let mut forecasts = vec![0.0; n];
        let mut residuals = vec![0.0; n];

        levels[0] = seed.intercept;
        trends[0] = seed.slope;

        for (i, &y) in values.iter().enumerate() {
            let live = if i < period {
                initial_seasonals[i]
            } else {
                seasonals[i - period]
            };

            let projected = levels[i] + trends[i];
            forecasts[i] = projected * live;
            residuals[i] = y - forecasts[i];

            levels[i + 1] = alpha * (y / live) + (1.0 - alpha) * projected;
            trends[i + 1] = beta * (levels[i + 1] - levels[i]) + (1.0 - beta) * trends[i];
            seasonals[i] = if i < period {
                live
            } else {
                gamma * (y / levels[i + 1]) + (1.0 - gamma) * live
            };
        }

        Ok(HoltWintersFit {
            period,
            seed,
            initial_seasonals,
            levels,
            trends,
            seasonals,
            forecasts,
            residuals,
        })
    }

    fn name(&self) -> &str {
        "HoltWinters"
    }
}

/// Holt-Winters multiplicative smoothing; returns N one-step forecasts.
///
/// # Errors
/// * `InvalidParameter` if `period < 2` or `period > N`
/// * `NumericDegeneracy` if the seasonal bootstrap divides by zero
///
/// # Example
/// ```
/// use tsmooth::holt_winters;
///
/// let values = [10.0, 20.0, 10.0, 20.0, 10.0, 20.0];
/// let forecasts = holt_winters(&values, 2, 0.3, 0.1, 0.2).unwrap();
/// assert_eq!(forecasts.len(), values.len());
/// ```
pub fn holt_winters(
    values: &[f64],
    period: usize,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Result<Vec<f64>> {
    HoltWinters::new(period, alpha, beta, gamma)
        .smooth(values)
        .map(HoltWintersFit::into_forecasts)
}
