#![deny(missing_docs)]
//! Immutable fixed-length vectors, rectangular matrices, norms and coordinate
//! helpers. Every binary operation validates operand shapes and reports
//! mismatches as `SolarError::Shape`.

pub mod coords;
pub mod matrix;
pub mod norm;
pub mod span;
pub mod traits;
pub mod vector;
mod vector3;

pub use coords::{euclidean_to_spheric, spheric_to_euclidean, Spherical};
pub use matrix::{Matrix, Selection};
pub use norm::{distance, norm};
pub use span::Span;
pub use traits::{LinearSpace, NumericContainer, Scalar};
pub use vector::Vector;
pub use vector3::Vector3;
