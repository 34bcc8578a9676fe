//! The abstract kernel contract
//!
//! This module defines the trait every covariance function implements, from
//! single closed-form leaves to arbitrarily deep compositions. Concrete
//! families and the composition operators live in downstream crates.

use crate::error::{Error, Result};

/// A pairwise covariance function with a differentiable flat parameter vector.
///
/// A kernel is a node in an ownership tree: leaves hold closed-form formulas
/// and their hyperparameters, interior nodes combine two children. Every node
/// exposes the same contract, so a caller can treat an arbitrarily deep
/// composition exactly like a single primitive kernel.
///
/// # The flat parameter vector
///
/// All tunable hyperparameters reachable from a node form one conceptual
/// vector of length [`n_params`](Kernel::n_params), concatenated in a fixed
/// traversal order: for compositions, the left subtree's parameters before
/// the right subtree's; for leaves, the declared hyperparameters before any
/// nested collaborator's own parameters. [`parameter`](Kernel::parameter),
/// [`set_parameter`](Kernel::set_parameter), and the order of partials
/// written by [`gradient`](Kernel::gradient) all use this indexing.
///
/// `n_params` and [`ndim`](Kernel::ndim) are fixed for the lifetime of a
/// node; parameters change value but are never added or removed.
///
/// # Evaluation
///
/// [`value`](Kernel::value) and [`gradient`](Kernel::gradient) are
/// synchronous and side-effect free: they never mutate kernel state and
/// allocate nothing beyond the caller-provided buffer. Shared read-only
/// evaluation from multiple threads is safe; mutation requires `&mut self`
/// and is therefore serialized by the borrow checker.
///
/// # Example
///
/// ```rust
/// use covar_core::{check_grad_len, check_ndim, check_param_index, Kernel, Result};
///
/// /// Constant covariance: one tunable value, independent of the inputs.
/// struct Bias {
///     ndim: usize,
///     value: f64,
/// }
///
/// impl Kernel for Bias {
///     fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
///         check_ndim(self.ndim, x1, x2)?;
///         Ok(self.value)
///     }
///
///     fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
///         check_ndim(self.ndim, x1, x2)?;
///         check_grad_len(1, out)?;
///         out[0] = 1.0;
///         Ok(())
///     }
///
///     fn n_params(&self) -> usize {
///         1
///     }
///
///     fn ndim(&self) -> usize {
///         self.ndim
///     }
///
///     fn parameter(&self, i: usize) -> Result<f64> {
///         check_param_index(i, 1)?;
///         Ok(self.value)
///     }
///
///     fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
///         check_param_index(i, 1)?;
///         self.value = value;
///         Ok(())
///     }
/// }
///
/// let mut k = Bias { ndim: 2, value: 0.5 };
/// assert_eq!(k.value(&[0.0, 1.0], &[2.0, 3.0]).unwrap(), 0.5);
/// k.set_parameter(0, 2.0).unwrap();
/// assert_eq!(k.parameters().unwrap(), vec![2.0]);
/// assert!(k.parameter(1).is_err());
/// ```
pub trait Kernel: Send + Sync {
    /// Pairwise covariance between two feature vectors of length `ndim()`.
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64>;

    /// Write the `n_params()` partial derivatives of [`value`](Kernel::value)
    /// with respect to the flat parameter vector into `out`, in
    /// [`parameter`](Kernel::parameter) index order.
    ///
    /// `out` must have length exactly `n_params()`.
    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()>;

    /// Total number of tunable parameters in the subtree rooted here.
    fn n_params(&self) -> usize;

    /// Required feature-vector length.
    fn ndim(&self) -> usize;

    /// Read the `i`-th entry of the flat parameter vector.
    fn parameter(&self, i: usize) -> Result<f64>;

    /// Write the `i`-th entry of the flat parameter vector.
    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()>;

    /// Collect the flat parameter vector.
    fn parameters(&self) -> Result<Vec<f64>> {
        (0..self.n_params()).map(|i| self.parameter(i)).collect()
    }

    /// Overwrite the whole flat parameter vector.
    ///
    /// `values` must have length exactly `n_params()`.
    fn set_parameters(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.n_params() {
            return Err(Error::size_mismatch(
                self.n_params(),
                values.len(),
                "parameter vector",
            ));
        }
        for (i, &v) in values.iter().enumerate() {
            self.set_parameter(i, v)?;
        }
        Ok(())
    }

    /// Allocating convenience around [`gradient`](Kernel::gradient).
    fn gradient_vec(&self, x1: &[f64], x2: &[f64]) -> Result<Vec<f64>> {
        let mut out = vec![0.0; self.n_params()];
        self.gradient(x1, x2, &mut out)?;
        Ok(out)
    }
}

/// Boxed kernels delegate to their contents, so heterogeneous trees can be
/// assembled at runtime from `Box<dyn Kernel>` children.
impl<K: Kernel + ?Sized> Kernel for Box<K> {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        (**self).value(x1, x2)
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        (**self).gradient(x1, x2, out)
    }

    fn n_params(&self) -> usize {
        (**self).n_params()
    }

    fn ndim(&self) -> usize {
        (**self).ndim()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        (**self).parameter(i)
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        (**self).set_parameter(i, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{check_grad_len, check_ndim, check_param_index};

    /// Minimal leaf used to exercise the provided methods.
    struct Affine {
        ndim: usize,
        params: Vec<f64>,
    }

    impl Kernel for Affine {
        fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
            check_ndim(self.ndim, x1, x2)?;
            // offset + slope * x1.x2
            let dot: f64 = x1.iter().zip(x2).map(|(a, b)| a * b).sum();
            Ok(self.params[0] + self.params[1] * dot)
        }

        fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
            check_ndim(self.ndim, x1, x2)?;
            check_grad_len(2, out)?;
            out[0] = 1.0;
            out[1] = x1.iter().zip(x2).map(|(a, b)| a * b).sum();
            Ok(())
        }

        fn n_params(&self) -> usize {
            2
        }

        fn ndim(&self) -> usize {
            self.ndim
        }

        fn parameter(&self, i: usize) -> Result<f64> {
            check_param_index(i, 2)?;
            Ok(self.params[i])
        }

        fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
            check_param_index(i, 2)?;
            self.params[i] = value;
            Ok(())
        }
    }

    #[test]
    fn test_parameters_round_trip() {
        let mut k = Affine {
            ndim: 1,
            params: vec![0.5, 2.0],
        };
        assert_eq!(k.parameters().unwrap(), vec![0.5, 2.0]);

        k.set_parameters(&[1.0, -1.0]).unwrap();
        assert_eq!(k.parameters().unwrap(), vec![1.0, -1.0]);

        assert!(k.set_parameters(&[1.0]).is_err());
        assert!(k.set_parameter(2, 0.0).is_err());
    }

    #[test]
    fn test_gradient_vec_matches_buffer() {
        let k = Affine {
            ndim: 1,
            params: vec![0.5, 2.0],
        };
        let x1 = [3.0];
        let x2 = [4.0];

        let mut buf = [0.0; 2];
        k.gradient(&x1, &x2, &mut buf).unwrap();
        assert_eq!(k.gradient_vec(&x1, &x2).unwrap(), buf.to_vec());

        let mut short = [0.0; 1];
        assert!(k.gradient(&x1, &x2, &mut short).is_err());
    }

    #[test]
    fn test_boxed_kernel_delegates() {
        let mut k: Box<dyn Kernel> = Box::new(Affine {
            ndim: 1,
            params: vec![0.0, 1.0],
        });

        assert_eq!(k.n_params(), 2);
        assert_eq!(k.ndim(), 1);
        assert_eq!(k.value(&[2.0], &[3.0]).unwrap(), 6.0);

        k.set_parameter(0, 1.0).unwrap();
        assert_eq!(k.value(&[2.0], &[3.0]).unwrap(), 7.0);
        assert_eq!(k.gradient_vec(&[2.0], &[3.0]).unwrap(), vec![1.0, 6.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_reported() {
        let k = Affine {
            ndim: 2,
            params: vec![0.0, 1.0],
        };
        assert!(k.value(&[1.0], &[1.0, 2.0]).is_err());
        assert!(k.value(&[1.0, 2.0], &[1.0]).is_err());
    }
}
