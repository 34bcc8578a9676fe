//! Ordered axis selection for additive kernels

use covar_core::{Error, Result};

/// An ordered selection of feature-vector axes.
///
/// Additive kernels sum an independent per-axis contribution over the
/// selected axes instead of combining the inputs into one distance. The
/// subspace carries no tunable parameters; it only records which axes of an
/// `ndim`-long feature vector participate, in which order. Axes may repeat,
/// in which case each occurrence contributes a term.
#[derive(Debug, Clone)]
pub struct Subspace {
    ndim: usize,
    axes: Vec<usize>,
}

impl Subspace {
    /// Select the given axes of an `ndim`-long feature vector.
    pub fn new(ndim: usize, axes: Vec<usize>) -> Result<Self> {
        if let Some(&bad) = axes.iter().find(|&&a| a >= ndim) {
            return Err(Error::InvalidParameter(format!(
                "axis {bad} out of range for {ndim}-dimensional inputs"
            )));
        }
        Ok(Self { ndim, axes })
    }

    /// Select every axis, in order.
    pub fn full(ndim: usize) -> Self {
        Self {
            ndim,
            axes: (0..ndim).collect(),
        }
    }

    /// Required full feature-vector length.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of selected axes.
    pub fn naxes(&self) -> usize {
        self.axes.len()
    }

    /// The `i`-th selected axis.
    pub fn axis(&self, i: usize) -> Result<usize> {
        self.axes
            .get(i)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(i, self.axes.len()))
    }

    /// The selected axes, in order.
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }
}
