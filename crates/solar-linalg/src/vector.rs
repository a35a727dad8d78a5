//! Immutable vectors of arbitrary fixed dimension.

use std::fmt;
use std::ops::{Bound, Index, Mul, Neg, RangeBounds};

use serde::{Deserialize, Serialize};
use solar_core::SolarError;

use crate::traits::{LinearSpace, NumericContainer, Scalar};

/// Ordered sequence of scalars whose dimension is fixed at construction.
///
/// The zero-dimension vector is neutral as the right operand: adding or
/// subtracting it leaves the left operand unchanged, and its dot product
/// with anything is zero. Every other dimension mismatch is an error,
/// including an empty left operand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Wraps the provided elements.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// The zero-dimension vector.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// A vector of `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![T::zero(); dim],
        }
    }

    /// Copies the elements of a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this is the zero-dimension vector.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements by value.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Consumes the vector and returns its elements.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    /// Returns the element at `index`, or a bounds error.
    pub fn get(&self, index: usize) -> Result<T, SolarError> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| SolarError::out_of_bounds(index, self.len()))
    }

    /// Returns the elements covered by `range` as a new vector.
    ///
    /// Both ends are checked against `[0, len]`; a reversed range is an error,
    /// an empty one yields the zero-dimension vector.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self, SolarError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or_else(|| SolarError::out_of_bounds(s, self.len()))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or_else(|| SolarError::out_of_bounds(e, self.len()))?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        if end > self.len() {
            return Err(SolarError::out_of_bounds(end, self.len()));
        }
        if start > end {
            return Err(SolarError::out_of_bounds(start, end));
        }
        Ok(Self::from_slice(&self.data[start..end]))
    }

    /// Elementwise sum; see the type-level note on the empty vector.
    pub fn try_add(&self, other: &Self) -> Result<Self, SolarError> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference; see the type-level note on the empty vector.
    pub fn try_sub(&self, other: &Self) -> Result<Self, SolarError> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every element by `factor`.
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * factor).collect(),
        }
    }

    /// Scalar product; zero when either operand is the empty vector.
    pub fn dot(&self, other: &Self) -> Result<T, SolarError> {
        if self.is_empty() || other.is_empty() {
            return Ok(T::zero());
        }
        if self.len() != other.len() {
            return Err(SolarError::dimension_mismatch(self.len(), other.len()));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Concatenates the given vectors in order.
    pub fn concat<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Vector<T>>,
    {
        let mut data = Vec::new();
        for part in parts {
            data.extend_from_slice(&part.data);
        }
        Self { data }
    }

    /// Sums a collection of vectors that must all share one dimension.
    ///
    /// An empty collection sums to the zero-dimension vector.
    pub fn sum<'a, I>(vectors: I) -> Result<Self, SolarError>
    where
        I: IntoIterator<Item = &'a Vector<T>>,
    {
        let mut iter = vectors.into_iter();
        let Some(first) = iter.next() else {
            return Ok(Self::empty());
        };
        let mut acc = first.clone();
        for v in iter {
            if v.len() != acc.len() {
                return Err(SolarError::dimension_mismatch(acc.len(), v.len()));
            }
            for (a, &b) in acc.data.iter_mut().zip(&v.data) {
                *a = *a + b;
            }
        }
        Ok(acc)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Result<Self, SolarError> {
        if self.len() != other.len() {
            return Err(SolarError::dimension_mismatch(self.len(), other.len()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

impl<T: Scalar> NumericContainer<T> for Vector<T> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> LinearSpace<T> for Vector<T> {
    fn zeros(dim: usize) -> Self {
        Vector::zeros(dim)
    }

    fn try_add(&self, other: &Self) -> Result<Self, SolarError> {
        Vector::try_add(self, other)
    }

    fn try_sub(&self, other: &Self) -> Result<Self, SolarError> {
        Vector::try_sub(self, other)
    }

    fn scaled(&self, factor: T) -> Self {
        Vector::scaled(self, factor)
    }

    fn dot(&self, other: &Self) -> Result<T, SolarError> {
        Vector::dot(self, other)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, factor: T) -> Vector<T> {
        self.scaled(factor)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, factor: T) -> Vector<T> {
        self.scaled(factor)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector {
            data: self.data.iter().map(|&x| -x).collect(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: Vec::from(values),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vector: (")?;
        for (idx, value) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")>")
    }
}
