//! Parameter-free Euclidean squared distance

use crate::traits::Metric;
use covar_core::{check_grad_len, check_ndim, Error, Result};

/// Plain Euclidean squared distance, `r² = Σ (x1ⱼ - x2ⱼ)²`.
///
/// Carries no tunable parameters; useful as the fixed-scale baseline and for
/// kernels whose length scale is folded into the radial profile itself.
#[derive(Debug, Clone)]
pub struct Euclidean {
    ndim: usize,
}

impl Euclidean {
    pub fn new(ndim: usize) -> Self {
        Self { ndim }
    }
}

impl Metric for Euclidean {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        check_ndim(self.ndim, x1, x2)?;
        Ok(x1.iter().zip(x2).map(|(a, b)| (a - b) * (a - b)).sum())
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        check_ndim(self.ndim, x1, x2)?;
        check_grad_len(0, out)
    }

    fn n_params(&self) -> usize {
        0
    }

    fn ndim(&self) -> usize {
        self.ndim
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        Err(Error::index_out_of_range(i, 0))
    }

    fn set_parameter(&mut self, i: usize, _value: f64) -> Result<()> {
        Err(Error::index_out_of_range(i, 0))
    }
}
