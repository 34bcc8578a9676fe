//! Binary composition operators
//!
//! `Sum` and `Product` each own two child kernels and present the pair as a
//! single kernel. Children must agree on input dimensionality; the combined
//! parameter vector is the left child's followed by the right child's, and
//! index resolution mirrors that concatenation. N-ary compositions are built
//! by chaining binary ones.

use covar_core::{check_grad_len, Error, Kernel, Result};
use log::debug;

/// Two-child composite implementing the shared addressing pattern once:
/// route to `left` while `i < left.n_params()`, otherwise to `right` with the
/// index shifted down. Both operators reuse it.
#[derive(Debug, Clone)]
struct Pair<K1, K2> {
    left: K1,
    right: K2,
}

impl<K1: Kernel, K2: Kernel> Pair<K1, K2> {
    fn new(left: K1, right: K2) -> Result<Self> {
        if left.ndim() != right.ndim() {
            return Err(Error::ndim_mismatch(left.ndim(), right.ndim()));
        }
        Ok(Self { left, right })
    }

    fn n_params(&self) -> usize {
        self.left.n_params() + self.right.n_params()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        let n = self.left.n_params();
        if i < n {
            self.left.parameter(i)
        } else if i < self.n_params() {
            self.right.parameter(i - n)
        } else {
            Err(Error::index_out_of_range(i, self.n_params()))
        }
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        let n = self.left.n_params();
        if i < n {
            self.left.set_parameter(i, value)
        } else if i < self.n_params() {
            self.right.set_parameter(i - n, value)
        } else {
            Err(Error::index_out_of_range(i, self.n_params()))
        }
    }

    /// Split a caller-provided gradient buffer into the two children's halves.
    fn split_gradient<'a>(&self, out: &'a mut [f64]) -> Result<(&'a mut [f64], &'a mut [f64])> {
        check_grad_len(self.n_params(), out)?;
        Ok(out.split_at_mut(self.left.n_params()))
    }
}

/// Pointwise sum of two kernels: `k(x1, x2) = left(x1, x2) + right(x1, x2)`.
///
/// Each parameter belongs to exactly one side, so the gradient halves are
/// filled independently with no cross terms.
#[derive(Debug, Clone)]
pub struct Sum<K1, K2> {
    inner: Pair<K1, K2>,
}

impl<K1: Kernel, K2: Kernel> Sum<K1, K2> {
    /// Compose two kernels by addition. Fails with
    /// [`Error::NdimMismatch`] if they disagree on input dimensionality.
    pub fn new(left: K1, right: K2) -> Result<Self> {
        let inner = Pair::new(left, right)?;
        debug!(
            "composed sum kernel: {} + {} parameters",
            inner.left.n_params(),
            inner.right.n_params()
        );
        Ok(Self { inner })
    }

    pub fn left(&self) -> &K1 {
        &self.inner.left
    }

    pub fn right(&self) -> &K2 {
        &self.inner.right
    }

    pub fn into_parts(self) -> (K1, K2) {
        (self.inner.left, self.inner.right)
    }
}

impl<K1: Kernel, K2: Kernel> Kernel for Sum<K1, K2> {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        Ok(self.inner.left.value(x1, x2)? + self.inner.right.value(x1, x2)?)
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        let (lo, hi) = self.inner.split_gradient(out)?;
        self.inner.left.gradient(x1, x2, lo)?;
        self.inner.right.gradient(x1, x2, hi)
    }

    fn n_params(&self) -> usize {
        self.inner.n_params()
    }

    fn ndim(&self) -> usize {
        self.inner.left.ndim()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        self.inner.parameter(i)
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        self.inner.set_parameter(i, value)
    }
}

/// Pointwise product of two kernels: `k(x1, x2) = left(x1, x2) * right(x1, x2)`.
///
/// The gradient applies the product rule: each child's gradient half is
/// scaled by the other child's value. Child values are recomputed at every
/// product node per gradient call.
#[derive(Debug, Clone)]
pub struct Product<K1, K2> {
    inner: Pair<K1, K2>,
}

impl<K1: Kernel, K2: Kernel> Product<K1, K2> {
    /// Compose two kernels by multiplication. Fails with
    /// [`Error::NdimMismatch`] if they disagree on input dimensionality.
    pub fn new(left: K1, right: K2) -> Result<Self> {
        let inner = Pair::new(left, right)?;
        debug!(
            "composed product kernel: {} + {} parameters",
            inner.left.n_params(),
            inner.right.n_params()
        );
        Ok(Self { inner })
    }

    pub fn left(&self) -> &K1 {
        &self.inner.left
    }

    pub fn right(&self) -> &K2 {
        &self.inner.right
    }

    pub fn into_parts(self) -> (K1, K2) {
        (self.inner.left, self.inner.right)
    }
}

impl<K1: Kernel, K2: Kernel> Kernel for Product<K1, K2> {
    fn value(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        Ok(self.inner.left.value(x1, x2)? * self.inner.right.value(x1, x2)?)
    }

    fn gradient(&self, x1: &[f64], x2: &[f64], out: &mut [f64]) -> Result<()> {
        let (lo, hi) = self.inner.split_gradient(out)?;
        self.inner.left.gradient(x1, x2, lo)?;
        self.inner.right.gradient(x1, x2, hi)?;

        let left_value = self.inner.left.value(x1, x2)?;
        let right_value = self.inner.right.value(x1, x2)?;
        for g in lo.iter_mut() {
            *g *= right_value;
        }
        for g in hi.iter_mut() {
            *g *= left_value;
        }
        Ok(())
    }

    fn n_params(&self) -> usize {
        self.inner.n_params()
    }

    fn ndim(&self) -> usize {
        self.inner.left.ndim()
    }

    fn parameter(&self, i: usize) -> Result<f64> {
        self.inner.parameter(i)
    }

    fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        self.inner.set_parameter(i, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{exp_squared, rational_quadratic};
    use approx::assert_relative_eq;
    use covar_metrics::{Euclidean, Isotropic};

    fn leaf_a() -> impl Kernel + Clone {
        // 1 metric parameter
        exp_squared(Isotropic::new(2, 0.4)).unwrap()
    }

    fn leaf_b() -> impl Kernel + Clone {
        // 1 own + 1 metric parameter
        rational_quadratic(0.1, Isotropic::new(2, -0.3)).unwrap()
    }

    #[test]
    fn test_size_additivity() {
        let sum = Sum::new(leaf_a(), leaf_b()).unwrap();
        let product = Product::new(leaf_a(), leaf_b()).unwrap();
        assert_eq!(sum.n_params(), 3);
        assert_eq!(product.n_params(), 3);
        assert_eq!(sum.ndim(), 2);
    }

    #[test]
    fn test_ndim_mismatch_rejected() {
        let k1 = exp_squared(Euclidean::new(1)).unwrap();
        let k2 = exp_squared(Euclidean::new(2)).unwrap();
        assert!(matches!(
            Sum::new(k1, k2),
            Err(Error::NdimMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn test_value_laws() {
        let a = leaf_a();
        let b = leaf_b();
        let sum = Sum::new(a.clone(), b.clone()).unwrap();
        let product = Product::new(a.clone(), b.clone()).unwrap();

        let x1 = [0.3, -0.9];
        let x2 = [1.2, 0.4];
        let va = a.value(&x1, &x2).unwrap();
        let vb = b.value(&x1, &x2).unwrap();

        assert_relative_eq!(sum.value(&x1, &x2).unwrap(), va + vb, max_relative = 1e-12);
        assert_relative_eq!(
            product.value(&x1, &x2).unwrap(),
            va * vb,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_parameter_routing() {
        let mut sum = Sum::new(leaf_a(), leaf_b()).unwrap();
        let n_left = sum.left().n_params();

        // Writes through the composite land in the matching child.
        sum.set_parameter(0, 0.7).unwrap();
        sum.set_parameter(n_left, -0.2).unwrap();
        assert_eq!(sum.parameter(0).unwrap(), sum.left().parameter(0).unwrap());
        assert_eq!(
            sum.parameter(n_left).unwrap(),
            sum.right().parameter(0).unwrap()
        );
        assert!(sum.parameter(3).is_err());
        assert!(sum.set_parameter(3, 0.0).is_err());
    }

    #[test]
    fn test_sum_gradient_is_concatenation() {
        let a = leaf_a();
        let b = leaf_b();
        let sum = Sum::new(a.clone(), b.clone()).unwrap();

        let x1 = [0.3, -0.9];
        let x2 = [1.2, 0.4];
        let ga = a.gradient_vec(&x1, &x2).unwrap();
        let gb = b.gradient_vec(&x1, &x2).unwrap();
        let g = sum.gradient_vec(&x1, &x2).unwrap();

        assert_eq!(&g[..ga.len()], ga.as_slice());
        assert_eq!(&g[ga.len()..], gb.as_slice());
    }

    #[test]
    fn test_product_gradient_scaling_law() {
        let a = leaf_a();
        let b = leaf_b();
        let product = Product::new(a.clone(), b.clone()).unwrap();

        let x1 = [0.3, -0.9];
        let x2 = [1.2, 0.4];
        let va = a.value(&x1, &x2).unwrap();
        let vb = b.value(&x1, &x2).unwrap();
        let ga = a.gradient_vec(&x1, &x2).unwrap();
        let gb = b.gradient_vec(&x1, &x2).unwrap();
        let g = product.gradient_vec(&x1, &x2).unwrap();

        for (i, &gi) in ga.iter().enumerate() {
            assert_relative_eq!(g[i], gi * vb, max_relative = 1e-12);
        }
        for (i, &gi) in gb.iter().enumerate() {
            assert_relative_eq!(g[ga.len() + i], gi * va, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_gradient_buffer_length_checked() {
        let sum = Sum::new(leaf_a(), leaf_b()).unwrap();
        let mut short = [0.0; 2];
        assert!(sum.gradient(&[0.0, 0.0], &[1.0, 1.0], &mut short).is_err());
    }

    #[test]
    fn test_nested_composition() {
        // (a + b) * a, three levels deep
        let nested = Product::new(Sum::new(leaf_a(), leaf_b()).unwrap(), leaf_a()).unwrap();
        assert_eq!(nested.n_params(), 4);

        let x1 = [0.0, 0.5];
        let x2 = [-1.0, 2.0];
        let va = leaf_a().value(&x1, &x2).unwrap();
        let vb = leaf_b().value(&x1, &x2).unwrap();
        assert_relative_eq!(
            nested.value(&x1, &x2).unwrap(),
            (va + vb) * va,
            max_relative = 1e-12
        );
    }
}
