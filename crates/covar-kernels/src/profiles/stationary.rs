//! Radial profiles for stationary kernels

use crate::stationary::{RadialProfile, Stationary};
use covar_core::Result;
use covar_metrics::Metric;

/// Squared-exponential profile, `k(r²) = exp(-r²/2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpSquared;

impl RadialProfile for ExpSquared {
    fn n_params(&self) -> usize {
        0
    }

    fn value(&self, _params: &[f64], r2: f64) -> f64 {
        (-0.5 * r2).exp()
    }

    fn gradient(&self, _params: &[f64], _r2: f64, _out: &mut [f64]) {}

    fn radial_gradient(&self, _params: &[f64], r2: f64) -> f64 {
        -0.5 * (-0.5 * r2).exp()
    }
}

/// Squared-exponential kernel over the given metric.
pub fn exp_squared<M: Metric>(metric: M) -> Result<Stationary<ExpSquared, M>> {
    Stationary::new(ExpSquared, Vec::new(), metric)
}

/// Exponential profile, `k(r²) = exp(-√r²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl RadialProfile for Exp {
    fn n_params(&self) -> usize {
        0
    }

    fn value(&self, _params: &[f64], r2: f64) -> f64 {
        (-r2.sqrt()).exp()
    }

    fn gradient(&self, _params: &[f64], _r2: f64, _out: &mut [f64]) {}

    fn radial_gradient(&self, _params: &[f64], r2: f64) -> f64 {
        let r = r2.sqrt();
        // the one-sided derivative is unbounded at the origin
        if r < f64::EPSILON {
            0.0
        } else {
            -0.5 * (-r).exp() / r
        }
    }
}

/// Exponential kernel over the given metric.
pub fn exp<M: Metric>(metric: M) -> Result<Stationary<Exp, M>> {
    Stationary::new(Exp, Vec::new(), metric)
}

/// Matérn ν=3/2 profile, `k(r²) = (1 + s)·exp(-s)` with `s = √(3r²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matern32;

impl RadialProfile for Matern32 {
    fn n_params(&self) -> usize {
        0
    }

    fn value(&self, _params: &[f64], r2: f64) -> f64 {
        let s = (3.0 * r2).sqrt();
        (1.0 + s) * (-s).exp()
    }

    fn gradient(&self, _params: &[f64], _r2: f64, _out: &mut [f64]) {}

    fn radial_gradient(&self, _params: &[f64], r2: f64) -> f64 {
        let s = (3.0 * r2).sqrt();
        -1.5 * (-s).exp()
    }
}

/// Matérn ν=3/2 kernel over the given metric.
pub fn matern32<M: Metric>(metric: M) -> Result<Stationary<Matern32, M>> {
    Stationary::new(Matern32, Vec::new(), metric)
}

/// Matérn ν=5/2 profile, `k(r²) = (1 + s + s²/3)·exp(-s)` with `s = √(5r²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matern52;

impl RadialProfile for Matern52 {
    fn n_params(&self) -> usize {
        0
    }

    fn value(&self, _params: &[f64], r2: f64) -> f64 {
        let s = (5.0 * r2).sqrt();
        (1.0 + s + s * s / 3.0) * (-s).exp()
    }

    fn gradient(&self, _params: &[f64], _r2: f64, _out: &mut [f64]) {}

    fn radial_gradient(&self, _params: &[f64], r2: f64) -> f64 {
        let s = (5.0 * r2).sqrt();
        -(5.0 / 6.0) * (1.0 + s) * (-s).exp()
    }
}

/// Matérn ν=5/2 kernel over the given metric.
pub fn matern52<M: Metric>(metric: M) -> Result<Stationary<Matern52, M>> {
    Stationary::new(Matern52, Vec::new(), metric)
}

/// Rational-quadratic profile, `k(r²) = (1 + r²/(2α))^(-α)` with
/// `α = exp(log_alpha)`.
///
/// Hyperparameters: `[log_alpha]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RationalQuadratic;

impl RadialProfile for RationalQuadratic {
    fn n_params(&self) -> usize {
        1
    }

    fn value(&self, params: &[f64], r2: f64) -> f64 {
        let alpha = params[0].exp();
        let t = 1.0 + 0.5 * r2 / alpha;
        t.powf(-alpha)
    }

    fn gradient(&self, params: &[f64], r2: f64, out: &mut [f64]) {
        let alpha = params[0].exp();
        let t = 1.0 + 0.5 * r2 / alpha;
        // ∂k/∂log α = α·k·((t-1)/t - ln t)
        out[0] = alpha * t.powf(-alpha) * ((t - 1.0) / t - t.ln());
    }

    fn radial_gradient(&self, params: &[f64], r2: f64) -> f64 {
        let alpha = params[0].exp();
        let t = 1.0 + 0.5 * r2 / alpha;
        -0.5 * t.powf(-alpha - 1.0)
    }
}

/// Rational-quadratic kernel over the given metric.
pub fn rational_quadratic<M: Metric>(
    log_alpha: f64,
    metric: M,
) -> Result<Stationary<RationalQuadratic, M>> {
    Stationary::new(RationalQuadratic, vec![log_alpha], metric)
}
