#![deny(missing_docs)]
//! Explicit Runge-Kutta integration over any `LinearSpace` state,
//! parameterised by a Butcher tableau and advanced as a lazy, finite sequence
//! of states.

/// Butcher tableau interface and shape validation.
pub mod tableau;
/// Concrete coefficient sets.
pub mod methods;
/// The generic stepper and its step iterator.
pub mod stepper;

pub use methods::{Erk4, ExplicitEuler, Heun, Method, ThreeEighths};
pub use stepper::{RungeKutta, Step, Steps};
pub use tableau::{validate_tableau, ButcherTableau};
