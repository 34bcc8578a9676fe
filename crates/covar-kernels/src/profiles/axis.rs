//! Per-axis profiles for additive kernels

use crate::additive::{Additive, AxisProfile};
use covar_core::Result;
use covar_metrics::Subspace;
use std::f64::consts::PI;

/// Constant profile: each selected axis contributes `exp(log_value)`.
///
/// Hyperparameters: `[log_value]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constant;

impl AxisProfile for Constant {
    fn n_params(&self) -> usize {
        1
    }

    fn value(&self, params: &[f64], _x1: f64, _x2: f64) -> f64 {
        params[0].exp()
    }

    fn accumulate_gradient(&self, params: &[f64], _x1: f64, _x2: f64, out: &mut [f64]) {
        out[0] += params[0].exp();
    }
}

/// Constant kernel over the given subspace.
pub fn constant(log_value: f64, subspace: Subspace) -> Result<Additive<Constant>> {
    Additive::new(Constant, vec![log_value], subspace)
}

/// Dot-product profile, `k(x1, x2) = x1·x2` per axis. No hyperparameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProduct;

impl AxisProfile for DotProduct {
    fn n_params(&self) -> usize {
        0
    }

    fn value(&self, _params: &[f64], x1: f64, x2: f64) -> f64 {
        x1 * x2
    }

    fn accumulate_gradient(&self, _params: &[f64], _x1: f64, _x2: f64, _out: &mut [f64]) {}
}

/// Dot-product kernel over the given subspace.
pub fn dot_product(subspace: Subspace) -> Result<Additive<DotProduct>> {
    Additive::new(DotProduct, Vec::new(), subspace)
}

/// Cosine profile, `k(x1, x2) = cos(2π(x1 - x2)/P)` with `P = exp(log_period)`.
///
/// Hyperparameters: `[log_period]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl AxisProfile for Cosine {
    fn n_params(&self) -> usize {
        1
    }

    fn value(&self, params: &[f64], x1: f64, x2: f64) -> f64 {
        let a = 2.0 * PI * (x1 - x2) / params[0].exp();
        a.cos()
    }

    fn accumulate_gradient(&self, params: &[f64], x1: f64, x2: f64, out: &mut [f64]) {
        let a = 2.0 * PI * (x1 - x2) / params[0].exp();
        // ∂k/∂log P = a·sin(a)
        out[0] += a * a.sin();
    }
}

/// Cosine kernel over the given subspace.
pub fn cosine(log_period: f64, subspace: Subspace) -> Result<Additive<Cosine>> {
    Additive::new(Cosine, vec![log_period], subspace)
}

/// Exponential-sine-squared (periodic) profile,
/// `k(x1, x2) = exp(-γ·sin²(a))` with `a = π(x1 - x2)/P` and
/// `P = exp(log_period)`.
///
/// Hyperparameters: `[gamma, log_period]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpSine2;

impl AxisProfile for ExpSine2 {
    fn n_params(&self) -> usize {
        2
    }

    fn value(&self, params: &[f64], x1: f64, x2: f64) -> f64 {
        let a = PI * (x1 - x2) / params[1].exp();
        let s = a.sin();
        (-params[0] * s * s).exp()
    }

    fn accumulate_gradient(&self, params: &[f64], x1: f64, x2: f64, out: &mut [f64]) {
        let gamma = params[0];
        let a = PI * (x1 - x2) / params[1].exp();
        let s = a.sin();
        let k = (-gamma * s * s).exp();
        out[0] += -s * s * k;
        // ∂k/∂log P = γ·a·sin(2a)·k
        out[1] += gamma * a * (2.0 * a).sin() * k;
    }
}

/// Periodic kernel over the given subspace.
pub fn exp_sine2(gamma: f64, log_period: f64, subspace: Subspace) -> Result<Additive<ExpSine2>> {
    Additive::new(ExpSine2, vec![gamma, log_period], subspace)
}

/// Local Gaussian profile,
/// `k(x1, x2) = exp(-((x1-m)² + (x2-m)²)/(2w))` with `w = exp(log_width)`:
/// covariance concentrated around a location `m` of the input space.
///
/// Hyperparameters: `[location, log_width]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGaussian;

impl AxisProfile for LocalGaussian {
    fn n_params(&self) -> usize {
        2
    }

    fn value(&self, params: &[f64], x1: f64, x2: f64) -> f64 {
        let u = x1 - params[0];
        let v = x2 - params[0];
        (-(u * u + v * v) / (2.0 * params[1].exp())).exp()
    }

    fn accumulate_gradient(&self, params: &[f64], x1: f64, x2: f64, out: &mut [f64]) {
        let w = params[1].exp();
        let u = x1 - params[0];
        let v = x2 - params[0];
        let q = u * u + v * v;
        let k = (-q / (2.0 * w)).exp();
        out[0] += (u + v) / w * k;
        out[1] += q / (2.0 * w) * k;
    }
}

/// Local Gaussian kernel over the given subspace.
pub fn local_gaussian(
    location: f64,
    log_width: f64,
    subspace: Subspace,
) -> Result<Additive<LocalGaussian>> {
    Additive::new(LocalGaussian, vec![location, log_width], subspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn numerical_param_gradient<P: AxisProfile>(
        profile: &P,
        params: &[f64],
        i: usize,
        x1: f64,
        x2: f64,
    ) -> f64 {
        let h = 1e-6;
        let mut hi = params.to_vec();
        let mut lo = params.to_vec();
        hi[i] += h;
        lo[i] -= h;
        (profile.value(&hi, x1, x2) - profile.value(&lo, x1, x2)) / (2.0 * h)
    }

    fn assert_gradient_matches<P: AxisProfile>(profile: &P, params: &[f64], x1: f64, x2: f64) {
        let mut grad = vec![0.0; profile.n_params()];
        profile.accumulate_gradient(params, x1, x2, &mut grad);
        for i in 0..profile.n_params() {
            assert_relative_eq!(
                grad[i],
                numerical_param_gradient(profile, params, i, x1, x2),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_constant_gradient() {
        assert_gradient_matches(&Constant, &[0.7], 0.0, 1.0);
        assert_relative_eq!(Constant.value(&[0.0], 5.0, -3.0), 1.0);
    }

    #[test]
    fn test_cosine_gradient() {
        for &(x1, x2) in &[(0.0, 0.5), (1.2, -0.7), (3.0, 3.0)] {
            assert_gradient_matches(&Cosine, &[0.3], x1, x2);
        }
        // zero separation → cos(0) = 1
        assert_relative_eq!(Cosine.value(&[0.0], 2.0, 2.0), 1.0);
    }

    #[test]
    fn test_exp_sine2_gradient() {
        for &(gamma, log_period) in &[(0.5, 0.0), (2.0, -0.4), (1.0, 0.8)] {
            for &(x1, x2) in &[(0.0, 0.3), (1.5, -0.2)] {
                assert_gradient_matches(&ExpSine2, &[gamma, log_period], x1, x2);
            }
        }
        // periodicity: shifting one input by a full period is invisible
        let period = 0.5_f64;
        let k0 = ExpSine2.value(&[1.0, period.ln()], 0.2, 0.7);
        let k1 = ExpSine2.value(&[1.0, period.ln()], 0.2, 0.7 + period);
        assert_relative_eq!(k0, k1, epsilon = 1e-12);
    }

    #[test]
    fn test_local_gaussian_gradient() {
        for &(location, log_width) in &[(0.0, 0.0), (1.0, -0.5), (-0.3, 0.6)] {
            assert_gradient_matches(&LocalGaussian, &[location, log_width], 0.4, -0.9);
        }
        // both inputs at the location → k = 1
        assert_relative_eq!(LocalGaussian.value(&[0.8, 0.2], 0.8, 0.8), 1.0);
    }

    #[test]
    fn test_dot_product_has_no_gradient() {
        assert_eq!(DotProduct.n_params(), 0);
        assert_relative_eq!(DotProduct.value(&[], 2.0, -3.0), -6.0);
    }
}
