//! Core trait for squared-distance metrics

use covar_core::Result;

/// A parameterized squared distance between two feature vectors.
///
/// Stationary kernels reduce a pair of inputs to a single scalar `r²` through
/// a metric, then apply a closed-form radial profile to it. The metric owns
/// its scale parameters and follows the same flat-vector addressing contract
/// as a kernel, so a stationary kernel can splice the metric's parameters
/// onto the end of its own.
pub trait Metric: Send + Sync {
    /// Squared distance `r²` between two feature vectors of length `ndim()`.
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64>;

    /// Write `∂r²/∂θ` for each of the metric's own parameters into `out`,
    /// in [`parameter`](Metric::parameter) index order.
    ///
    /// `out` must have length exactly `n_params()`.
    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()>;

    /// Number of tunable parameters.
    fn n_params(&self) -> usize;

    /// Required feature-vector length.
    fn ndim(&self) -> usize;

    /// Read the `i`-th parameter.
    fn parameter(&self, i: usize) -> Result<f64>;

    /// Write the `i`-th parameter.
    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()>;
}
