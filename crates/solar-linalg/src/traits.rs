//! Element and container abstractions the numeric algorithms are written against.

use std::fmt::{Debug, Display};

use num_traits::Float;
use solar_core::SolarError;

/// Real number type usable as a vector or matrix element.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + Send + Sync + 'static {}

/// Read-only view over an ordered, fixed-length run of scalars.
pub trait NumericContainer<T: Scalar> {
    /// Borrows the elements in order.
    fn as_slice(&self) -> &[T];

    /// Number of elements.
    fn dim(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T: Scalar> NumericContainer<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Scalar, const N: usize> NumericContainer<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Scalar> NumericContainer<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

/// Vector-space operations required by the Runge-Kutta stepper.
///
/// Binary operations fail with a shape error when the operands disagree
/// on their dimension; they never truncate or pad.
pub trait LinearSpace<T: Scalar>: NumericContainer<T> + Clone + Sized {
    /// The all-zero element of the given dimension.
    fn zeros(dim: usize) -> Self;

    /// Elementwise sum.
    fn try_add(&self, other: &Self) -> Result<Self, SolarError>;

    /// Elementwise difference.
    fn try_sub(&self, other: &Self) -> Result<Self, SolarError>;

    /// Multiplies every element by `factor`.
    fn scaled(&self, factor: T) -> Self;

    /// Scalar product.
    fn dot(&self, other: &Self) -> Result<T, SolarError>;
}
