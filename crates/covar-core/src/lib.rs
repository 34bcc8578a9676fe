//! Core contract for composable covariance kernels
//!
//! This crate provides the foundation the rest of the covar workspace builds
//! on: the [`Kernel`] trait (pairwise covariance evaluation plus a flat,
//! globally addressable hyperparameter vector), the unified [`Error`] type,
//! and the validation helpers every tree node shares.
//!
//! Concrete kernel families and the sum/product composition operators live in
//! `covar-kernels`; distance metrics and axis subspaces live in
//! `covar-metrics`.

pub mod error;
pub mod traits;
pub mod validate;

// Re-export core types
pub use error::{Error, Result};
pub use traits::Kernel;
pub use validate::{check_grad_len, check_ndim, check_param_index};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
