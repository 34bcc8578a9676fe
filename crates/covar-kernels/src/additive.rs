//! Per-axis kernels: an axis profile summed over a subspace
//!
//! An additive kernel applies a closed-form pairwise-scalar formula to each
//! axis a [`Subspace`] selects and sums the independent contributions. No
//! metric is involved; the subspace contributes no tunable parameters.

use covar_core::{check_grad_len, check_ndim, Error, Kernel, Result};
use covar_metrics::Subspace;
use log::debug;

/// Closed-form pairwise-scalar covariance profile applied per axis.
///
/// Implementations are stateless formula carriers; the hyperparameter values
/// live in the [`Additive`] node that owns the profile. `params` always has
/// length `n_params()` (enforced at node construction).
pub trait AxisProfile: Send + Sync {
    /// Number of hyperparameters the formula declares.
    fn n_params(&self) -> usize;

    /// `k(x1ⱼ, x2ⱼ)` for one axis at the given hyperparameters.
    fn value(&self, params: &[f64], x1: f64, x2: f64) -> f64;

    /// Add this axis's `∂k/∂paramᵢ` into `out` (length `n_params()`).
    ///
    /// Accumulating rather than writing lets the owning kernel sum over axes
    /// without scratch storage; the buffer is zeroed before the axis loop.
    fn accumulate_gradient(&self, params: &[f64], x1: f64, x2: f64, out: &mut [f64]);
}

/// A leaf kernel summing an [`AxisProfile`] over a [`Subspace`].
///
/// An empty subspace is valid and yields value 0 and an all-zero gradient
/// regardless of the hyperparameters.
#[derive(Debug, Clone)]
pub struct Additive<P> {
    profile: P,
    params: Vec<f64>,
    subspace: Subspace,
}

impl<P: AxisProfile> Additive<P> {
    /// Build an additive kernel from a profile, its hyperparameter values
    /// (in declared order), and an owned subspace.
    pub fn new(profile: P, params: Vec<f64>, subspace: Subspace) -> Result<Self> {
        if params.len() != profile.n_params() {
            return Err(Error::size_mismatch(
                profile.n_params(),
                params.len(),
                "profile hyperparameters",
            ));
        }
        debug!(
            "additive kernel: {} parameters over {} of {} axes",
            params.len(),
            subspace.naxes(),
            subspace.ndim()
        );
        Ok(Self {
            profile,
            params,
            subspace,
        })
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn subspace(&self) -> &Subspace {
        &self.subspace
    }
}

impl<P: AxisProfile> Kernel for Additive<P> {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        check_ndim(self.subspace.ndim(), x1, x2)?;
        Ok(self
            .subspace
            .axes()
            .iter()
            .map(|&j| self.profile.value(&self.params, x1[j], x2[j]))
            .sum())
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        check_ndim(self.subspace.ndim(), x1, x2)?;
        check_grad_len(self.params.len(), out)?;
        out.fill(0.0);
        for &j in self.subspace.axes() {
            self.profile
                .accumulate_gradient(&self.params, x1[j], x2[j], out);
        }
        Ok(())
    }

    fn n_params(&self) -> usize {
        self.params.len()
    }

    fn ndim(&self) -> usize {
        self.subspace.ndim()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        if i < self.params.len() {
            Ok(self.params[i])
        } else {
            Err(Error::index_out_of_range(i, self.params.len()))
        }
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        if i < self.params.len() {
            self.params[i] = value;
            Ok(())
        } else {
            Err(Error::index_out_of_range(i, self.params.len()))
        }
    }
}
