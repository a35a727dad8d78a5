#![deny(missing_docs)]
//! Newtonian point-mass physics for the SOLAR engine: bodies, the flat state
//! layout consumed by the integrators, the n-body derivative and the
//! Hamiltonian diagnostic.

/// Physical constants and unit conversions.
pub mod constants;
/// Point masses and their serializable descriptors.
pub mod body;
/// Conversion between body collections and flat state vectors.
pub mod state;
/// The gravitational derivative of a flat state.
pub mod force;
/// Kinetic, potential and total energy.
pub mod energy;
/// Built-in initial conditions.
pub mod presets;

pub use body::{Body, BodyDescriptor};
pub use constants::{G, SECONDS_PER_HOUR};
pub use energy::{gravitational_energy, hamiltonian, kinetic_energy};
pub use force::{accelerations, n_body};
pub use presets::{bodies_from_descriptors, solar_system, standardize_name, Preset};
pub use state::{
    flatten, flatten_with_mass, unflatten, unflatten_with_mass, SystemState, MASS_STRIDE,
    STATE_STRIDE,
};
