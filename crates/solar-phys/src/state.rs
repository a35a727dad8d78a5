use solar_core::{ErrorInfo, SolarError};
use solar_linalg::{Vector, Vector3};

use crate::body::{Body, FLAT_BODY_LEN};

/// Entries per body in the integrated state: position then velocity.
pub const STATE_STRIDE: usize = 6;

/// Entries per body when the mass is stored inline.
pub const MASS_STRIDE: usize = FLAT_BODY_LEN;

/// Flat integrated state plus the masses travelling alongside it.
///
/// `state.len() == STATE_STRIDE * masses.len()` holds for every value.
/// Both halves share the order of the bodies they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    state: Vector,
    masses: Vec<f64>,
}

impl SystemState {
    /// Pairs a state with its masses after checking the layout.
    pub fn new(state: Vector, masses: Vec<f64>) -> Result<Self, SolarError> {
        check_layout(&state, &masses)?;
        Ok(Self { state, masses })
    }

    /// The `6k` position/velocity vector.
    pub fn state(&self) -> &Vector {
        &self.state
    }

    /// One mass per body.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Number of bodies.
    pub fn body_count(&self) -> usize {
        self.masses.len()
    }

    /// Splits into `(state, masses)`.
    pub fn into_parts(self) -> (Vector, Vec<f64>) {
        (self.state, self.masses)
    }
}

/// Verifies that `state` holds exactly six entries per mass and returns
/// the body count.
pub fn check_layout(state: &Vector, masses: &[f64]) -> Result<usize, SolarError> {
    if state.len() % STATE_STRIDE != 0 {
        return Err(SolarError::Shape(
            ErrorInfo::new("ragged-state", "state length must be a multiple of 6")
                .with_context("length", state.len()),
        ));
    }
    let bodies = state.len() / STATE_STRIDE;
    if bodies != masses.len() {
        return Err(SolarError::Shape(
            ErrorInfo::new("mass-count-mismatch", "one mass is required per body in the state")
                .with_context("bodies", bodies)
                .with_context("masses", masses.len()),
        ));
    }
    Ok(bodies)
}

/// Encodes bodies as a `6k` state vector and a parallel mass sequence.
///
/// No bodies give the zero-dimension vector and no masses.
pub fn flatten(bodies: &[Body]) -> SystemState {
    let mut state = Vec::with_capacity(bodies.len() * STATE_STRIDE);
    for body in bodies {
        state.extend_from_slice(&body.position().to_array());
        state.extend_from_slice(&body.velocity().to_array());
    }
    SystemState {
        state: Vector::new(state),
        masses: bodies.iter().map(Body::mass).collect(),
    }
}

/// Encodes bodies as a `7k` vector with each mass in front of its body.
pub fn flatten_with_mass(bodies: &[Body]) -> Vector {
    bodies.iter().flat_map(|body| body.flatten()).collect()
}

fn check_names<S: AsRef<str>>(names: &[S], bodies: usize) -> Result<(), SolarError> {
    if names.len() != bodies {
        return Err(SolarError::Shape(
            ErrorInfo::new("name-count-mismatch", "one name is required per body in the state")
                .with_context("bodies", bodies)
                .with_context("names", names.len()),
        ));
    }
    Ok(())
}

/// Rebuilds bodies from a `6k` state, its masses and their names.
pub fn unflatten<S: AsRef<str>>(
    state: &Vector,
    masses: &[f64],
    names: &[S],
) -> Result<Vec<Body>, SolarError> {
    let count = check_layout(state, masses)?;
    check_names(names, count)?;
    state
        .as_slice()
        .chunks_exact(STATE_STRIDE)
        .zip(masses)
        .zip(names)
        .map(|((chunk, &mass), name)| {
            Body::named(
                name.as_ref(),
                mass,
                Vector3::new(chunk[0], chunk[1], chunk[2]),
                Vector3::new(chunk[3], chunk[4], chunk[5]),
            )
        })
        .collect()
}

/// Inverse of [`flatten_with_mass`].
pub fn unflatten_with_mass<S: AsRef<str>>(
    state: &Vector,
    names: &[S],
) -> Result<Vec<Body>, SolarError> {
    if state.len() % MASS_STRIDE != 0 {
        return Err(SolarError::Shape(
            ErrorInfo::new("ragged-state", "state length must be a multiple of 7")
                .with_context("length", state.len()),
        ));
    }
    check_names(names, state.len() / MASS_STRIDE)?;
    state
        .as_slice()
        .chunks_exact(MASS_STRIDE)
        .zip(names)
        .map(|(chunk, name)| Body::from_flat(name.as_ref(), chunk))
        .collect()
}
