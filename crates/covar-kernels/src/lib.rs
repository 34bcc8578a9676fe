//! Composable, differentiable covariance kernels
//!
//! This crate provides the composition and parameter-addressing engine for
//! Gaussian-process covariance functions: the [`Sum`] and [`Product`]
//! operators, the two generic leaf families ([`Stationary`] over a metric,
//! [`Additive`] over an axis subspace), and the catalog of closed-form
//! [`profiles`].
//!
//! # Overview
//!
//! A kernel tree is assembled from leaves and binary operators and then
//! evaluated as a single [`Kernel`]: `value` and `gradient` recurse to the
//! leaves and combine on the way back up, while the flat parameter vector
//! concatenates every node's hyperparameters in a fixed traversal order
//! (left subtree before right, a leaf's own parameters before its metric's).
//! A GP engine can therefore drive an arbitrarily deep composition exactly
//! like a single primitive kernel: read and write parameters by flat index,
//! and ask for the matching partial derivatives.
//!
//! # Examples
//!
//! A periodic pattern on top of a smooth trend, with every hyperparameter
//! addressable through the root:
//!
//! ```rust
//! use covar_core::Kernel;
//! use covar_kernels::profiles::{exp_sine2, exp_squared};
//! use covar_kernels::Sum;
//! use covar_metrics::{Isotropic, Subspace};
//!
//! # fn main() -> covar_core::Result<()> {
//! let trend = exp_squared(Isotropic::new(1, 0.0))?;
//! let seasonal = exp_sine2(1.0, 0.0, Subspace::full(1))?;
//! let kernel = Sum::new(trend, seasonal)?;
//!
//! // 1 metric scale + gamma + log period
//! assert_eq!(kernel.n_params(), 3);
//!
//! let x1 = [0.2];
//! let x2 = [1.4];
//! let value = kernel.value(&x1, &x2)?;
//! assert!(value > 0.0);
//!
//! let mut grad = vec![0.0; kernel.n_params()];
//! kernel.gradient(&x1, &x2, &mut grad)?;
//! # Ok(())
//! # }
//! ```
//!
//! Heterogeneous trees can be assembled at runtime from boxed kernels:
//!
//! ```rust
//! use covar_core::Kernel;
//! use covar_kernels::profiles::{constant, matern32};
//! use covar_kernels::Product;
//! use covar_metrics::{Euclidean, Subspace};
//!
//! # fn main() -> covar_core::Result<()> {
//! let amplitude: Box<dyn Kernel> = Box::new(constant(0.5, Subspace::new(2, vec![0])?)?);
//! let shape: Box<dyn Kernel> = Box::new(matern32(Euclidean::new(2))?);
//! let kernel = Product::new(amplitude, shape)?;
//! assert_eq!(kernel.n_params(), 1);
//! # Ok(())
//! # }
//! ```

pub mod additive;
pub mod operators;
pub mod profiles;
pub mod stationary;

// Re-exports
pub use additive::{Additive, AxisProfile};
pub use operators::{Product, Sum};
pub use stationary::{RadialProfile, Stationary};

pub use covar_core::{Error, Kernel, Result};
