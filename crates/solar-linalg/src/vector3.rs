use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};
use solar_core::SolarError;

use crate::traits::{NumericContainer, Scalar};
use crate::vector::Vector;

/// Three-dimensional vector with named components.
///
/// Backed by a plain array so arithmetic between two `Vector3`s cannot
/// fail; conversions from dynamically sized data check the length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3<T = f64>([T; 3]);

impl<T: Scalar> Vector3<T> {
    /// Builds a vector from its components.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// The origin.
    pub fn zero() -> Self {
        Self([T::zero(); 3])
    }

    /// First component.
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Third component.
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Components as an array.
    pub fn to_array(self) -> [T; 3] {
        self.0
    }

    /// Copies the components into a dynamically sized [`Vector`].
    pub fn to_vector(self) -> Vector<T> {
        Vector::from(self.0)
    }

    /// Builds a vector from a slice that must hold exactly three elements.
    pub fn try_from_slice(values: &[T]) -> Result<Self, SolarError> {
        match values {
            [x, y, z] => Ok(Self([*x, *y, *z])),
            _ => Err(SolarError::dimension_mismatch(3, values.len())),
        }
    }
}

impl<T: Scalar> NumericContainer<T> for Vector3<T> {
    fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1], self.0[2] - rhs.0[2]])
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        Self([self.0[0] * factor, self.0[1] * factor, self.0[2] * factor])
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from(values: [T; 3]) -> Self {
        Self(values)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> TryFrom<&Vector<T>> for Vector3<T> {
    type Error = SolarError;

    fn try_from(v: &Vector<T>) -> Result<Self, SolarError> {
        Self::try_from_slice(v.as_slice())
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vector3: ({}, {}, {})>", self.0[0], self.0[1], self.0[2])
    }
}
