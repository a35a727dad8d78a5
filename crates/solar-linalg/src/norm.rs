//! p-norms and Euclidean distance over any [`NumericContainer`].

use num_traits::NumCast;
use solar_core::{ErrorInfo, SolarError};

use crate::traits::{NumericContainer, Scalar};

/// Computes `(sum |v_i|^degree)^(1/degree)`.
///
/// Degrees 1 and 2 take exact shortcuts (plain sum and `sqrt`); a
/// non-positive degree is a domain error.
pub fn norm<T, V>(v: &V, degree: i32) -> Result<T, SolarError>
where
    T: Scalar,
    V: NumericContainer<T> + ?Sized,
{
    if degree <= 0 {
        return Err(SolarError::Domain(
            ErrorInfo::new("non-positive-degree", "norm degree must be strictly positive")
                .with_context("degree", degree),
        ));
    }
    let values = v.as_slice();
    let total = values
        .iter()
        .fold(T::zero(), |acc, &x| acc + x.abs().powi(degree));
    let result = match degree {
        1 => total,
        2 => total.sqrt(),
        _ => {
            let exponent = <T as NumCast>::from(degree).map(|d| d.recip()).ok_or_else(|| {
                SolarError::domain("unrepresentable-degree", "degree does not fit the scalar type")
            })?;
            total.powf(exponent)
        }
    };
    Ok(result)
}

/// Euclidean distance between two points of equal dimension.
pub fn distance<T, A, B>(a: &A, b: &B) -> Result<T, SolarError>
where
    T: Scalar,
    A: NumericContainer<T> + ?Sized,
    B: NumericContainer<T> + ?Sized,
{
    let (a, b) = (a.as_slice(), b.as_slice());
    if a.len() != b.len() {
        return Err(SolarError::dimension_mismatch(a.len(), b.len()));
    }
    let squared = a
        .iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + (y - x) * (y - x));
    Ok(squared.sqrt())
}
