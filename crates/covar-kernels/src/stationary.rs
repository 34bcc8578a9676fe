//! Distance-based kernels: a radial profile over a metric
//!
//! A stationary kernel depends on its inputs only through the squared
//! distance `r²` computed by a [`Metric`]. The closed-form formula lives in a
//! stateless [`RadialProfile`] strategy; the kernel node owns the
//! hyperparameter values and the metric, and splices the metric's parameters
//! onto the end of its own in the flat parameter vector.

use covar_core::{check_grad_len, Error, Kernel, Result};
use covar_metrics::Metric;
use log::debug;

/// Closed-form radial covariance profile evaluated at a squared distance.
///
/// Implementations are stateless formula carriers; the hyperparameter values
/// live in the [`Stationary`] node that owns the profile and are passed in on
/// every call. `params` always has length `n_params()` (enforced at node
/// construction).
pub trait RadialProfile: Send + Sync {
    /// Number of hyperparameters the formula declares.
    fn n_params(&self) -> usize;

    /// `k(r²)` at the given hyperparameters.
    fn value(&self, params: &[f64], r2: f64) -> f64;

    /// Write `∂k/∂paramᵢ` at `r2` for each hyperparameter into `out`
    /// (length `n_params()`).
    fn gradient(&self, params: &[f64], r2: f64, out: &mut [f64]);

    /// `∂k/∂r²` at `r2`, used to chain into the metric's own gradients.
    fn radial_gradient(&self, params: &[f64], r2: f64) -> f64;
}

/// A leaf kernel bridging a [`RadialProfile`] to a [`Metric`].
///
/// Flat parameter vector: the profile's hyperparameters in declared order,
/// then the metric's parameters. The gradient's metric block is the metric's
/// `∂r²/∂θ` scaled element-wise by the profile's `∂k/∂r²` — the chain rule
/// through `r²`.
#[derive(Debug, Clone)]
pub struct Stationary<P, M> {
    profile: P,
    params: Vec<f64>,
    metric: M,
}

impl<P: RadialProfile, M: Metric> Stationary<P, M> {
    /// Build a stationary kernel from a profile, its hyperparameter values
    /// (in declared order), and an owned metric.
    pub fn new(profile: P, params: Vec<f64>, metric: M) -> Result<Self> {
        if params.len() != profile.n_params() {
            return Err(Error::size_mismatch(
                profile.n_params(),
                params.len(),
                "profile hyperparameters",
            ));
        }
        debug!(
            "stationary kernel: {} own + {} metric parameters, ndim {}",
            params.len(),
            metric.n_params(),
            metric.ndim()
        );
        Ok(Self {
            profile,
            params,
            metric,
        })
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<P: RadialProfile, M: Metric> Kernel for Stationary<P, M> {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        let r2 = self.metric.value(x1, x2)?;
        Ok(self.profile.value(&self.params, r2))
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        check_grad_len(self.n_params(), out)?;
        let r2 = self.metric.value(x1, x2)?;

        let (own, metric_block) = out.split_at_mut(self.params.len());
        self.profile.gradient(&self.params, r2, own);

        self.metric.gradient(x1, x2, metric_block)?;
        let r2_grad = self.profile.radial_gradient(&self.params, r2);
        for g in metric_block.iter_mut() {
            *g *= r2_grad;
        }
        Ok(())
    }

    fn n_params(&self) -> usize {
        self.params.len() + self.metric.n_params()
    }

    fn ndim(&self) -> usize {
        self.metric.ndim()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        let k = self.params.len();
        if i < k {
            Ok(self.params[i])
        } else if i < self.n_params() {
            self.metric.parameter(i - k)
        } else {
            Err(Error::index_out_of_range(i, self.n_params()))
        }
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        let k = self.params.len();
        if i < k {
            self.params[i] = value;
            Ok(())
        } else if i < self.n_params() {
            self.metric.set_parameter(i - k, value)
        } else {
            Err(Error::index_out_of_range(i, self.n_params()))
        }
    }
}
