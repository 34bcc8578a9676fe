//! Error types for covariance kernel construction and evaluation
//!
//! Provides a unified error type for all covar crates.

use thiserror::Error;

/// Core error type for kernel operations
#[derive(Error, Debug)]
pub enum Error {
    /// Flat parameter index outside the node's parameter vector
    #[error("Parameter index {index} out of range for {size} parameters")]
    IndexOutOfRange { index: usize, size: usize },

    /// Feature vector of the wrong length
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Composed kernels disagree on input dimensionality
    #[error("Operands disagree on input dimension: {left} vs {right}")]
    NdimMismatch { left: usize, right: usize },

    /// Invalid parameter provided to a constructor
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a flat-vector index past the end
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create an error for a feature vector of the wrong length
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an error for children that disagree on input dimension
    pub fn ndim_mismatch(left: usize, right: usize) -> Self {
        Self::NdimMismatch { left, right }
    }

    /// Create an error for a buffer or vector of the wrong length
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
