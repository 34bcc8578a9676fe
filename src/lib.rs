//! Composable, differentiable covariance kernels for Gaussian process models
//!
//! This crate re-exports the covar workspace: the kernel contract and error
//! type from `covar-core`, distance metrics and axis subspaces from
//! `covar-metrics`, and the composition operators, leaf families, and
//! closed-form profile catalog from `covar-kernels`.
//!
//! # Overview
//!
//! A covariance function is assembled as a tree: closed-form leaves
//! (stationary kernels over a distance [`Metric`], additive kernels over an
//! axis [`Subspace`]) combined by [`Sum`] and [`Product`]. The whole tree is
//! one [`Kernel`]: pairwise evaluation, a flat hyperparameter vector in fixed
//! traversal order, and one exact partial derivative per parameter. A GP
//! regression or likelihood engine only ever sees that one contract.
//!
//! # Example
//!
//! ```rust
//! use covar::prelude::*;
//! use covar::{exp_squared, local_gaussian};
//!
//! # fn main() -> covar::Result<()> {
//! // A smooth kernel over both axes, modulated near an input location.
//! let smooth = exp_squared(Isotropic::new(2, 0.0))?;
//! let bump = local_gaussian(0.5, 0.0, Subspace::new(2, vec![0])?)?;
//! let mut kernel = Product::new(smooth, bump)?;
//!
//! let x1 = [0.4, -0.2];
//! let x2 = [0.6, 0.1];
//! let value = kernel.value(&x1, &x2)?;
//! assert!(value > 0.0);
//!
//! // The optimizer's view: one flat vector, one gradient per entry.
//! let theta = kernel.parameters()?;
//! let grad = kernel.gradient_vec(&x1, &x2)?;
//! assert_eq!(theta.len(), grad.len());
//!
//! kernel.set_parameter(0, -0.3)?;
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use covar_core::{check_grad_len, check_ndim, check_param_index, Error, Kernel, Result};

pub use covar_metrics::{Diagonal, Euclidean, Isotropic, Metric, Subspace};

pub use covar_kernels::{Additive, AxisProfile, Product, RadialProfile, Stationary, Sum};

pub use covar_kernels::profiles::{
    constant, cosine, dot_product, exp, exp_sine2, exp_squared, local_gaussian, matern32,
    matern52, rational_quadratic, Constant, Cosine, DotProduct, Exp, ExpSine2, ExpSquared,
    LocalGaussian, Matern32, Matern52, RationalQuadratic,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Diagonal, Error, Euclidean, Isotropic, Kernel, Metric, Product, Result, Subspace, Sum,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_whole_stack_round_trip() {
        let smooth = exp_squared(Euclidean::new(1)).unwrap();
        let seasonal = exp_sine2(1.0, 0.0, Subspace::full(1)).unwrap();
        let kernel = Sum::new(smooth, seasonal).unwrap();

        // coincident points: both terms are 1
        assert_relative_eq!(kernel.value(&[0.3], &[0.3]).unwrap(), 2.0);

        let grad = kernel.gradient_vec(&[0.0], &[2.0]).unwrap();
        assert_eq!(grad.len(), kernel.n_params());
    }
}
