//! Shared validation helpers for the parameter addressing contract
//!
//! Every node in a kernel tree performs the same three checks: flat-vector
//! index bounds, feature-vector length, and gradient-buffer length. The
//! helpers here keep the error shapes identical across crates.

use crate::error::{Error, Result};

/// Check a flat-vector index against a node's parameter count.
pub fn check_param_index(index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(Error::index_out_of_range(index, size));
    }
    Ok(())
}

/// Check a pair of feature vectors against a node's input dimensionality.
pub fn check_ndim(ndim: usize, x1: &[f64], x2: &[f64]) -> Result<()> {
    if x1.len() != ndim {
        return Err(Error::dimension_mismatch(ndim, x1.len()));
    }
    if x2.len() != ndim {
        return Err(Error::dimension_mismatch(ndim, x2.len()));
    }
    Ok(())
}

/// Check a caller-provided gradient buffer against a node's parameter count.
pub fn check_grad_len(expected: usize, out: &[f64]) -> Result<()> {
    if out.len() != expected {
        return Err(Error::size_mismatch(expected, out.len(), "gradient buffer"));
    }
    Ok(())
}
