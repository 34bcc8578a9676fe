//! The catalog of closed-form covariance profiles
//!
//! Each named family is a stateless strategy struct implementing
//! [`RadialProfile`](crate::RadialProfile) (distance-based) or
//! [`AxisProfile`](crate::AxisProfile) (per-axis), paired with a factory
//! function that assembles the ready-to-use kernel node. One generic node
//! type per family replaces per-formula classes; adding a family means
//! adding a profile here, nothing else.

mod axis;
mod stationary;

pub use axis::{
    constant, cosine, dot_product, exp_sine2, local_gaussian, Constant, Cosine, DotProduct,
    ExpSine2, LocalGaussian,
};
pub use stationary::{
    exp, exp_squared, matern32, matern52, rational_quadratic, Exp, ExpSquared, Matern32, Matern52,
    RationalQuadratic,
};
