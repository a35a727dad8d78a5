use solar_core::{ErrorInfo, SolarError};
use solar_linalg::{norm, Vector, Vector3};

use crate::constants::G;
use crate::state::{check_layout, STATE_STRIDE};

fn positions(state: &Vector) -> Vec<Vector3> {
    state
        .as_slice()
        .chunks_exact(STATE_STRIDE)
        .map(|chunk| Vector3::new(chunk[0], chunk[1], chunk[2]))
        .collect()
}

pub(crate) fn zero_distance(i: usize, j: usize) -> SolarError {
    SolarError::Numeric(
        ErrorInfo::new("zero-distance", "two bodies occupy the same position")
            .with_context("first", i)
            .with_context("second", j)
            .with_hint("no softening is applied; separate the bodies or shorten the step"),
    )
}

/// Gravitational acceleration of every body caused by all the others.
///
/// Pairs are skipped by index, so two distinct bodies with equal
/// components still interact (and fail with `zero-distance`).
pub fn accelerations(positions: &[Vector3], masses: &[f64]) -> Result<Vec<Vector3>, SolarError> {
    if positions.len() != masses.len() {
        return Err(SolarError::dimension_mismatch(positions.len(), masses.len()));
    }
    let mut out = Vec::with_capacity(positions.len());
    for (i, &here) in positions.iter().enumerate() {
        let mut total = Vector3::zero();
        for (j, (&there, &mass)) in positions.iter().zip(masses).enumerate() {
            if i == j {
                continue;
            }
            let delta = there - here;
            let r = norm(&delta, 2)?;
            if r == 0.0 {
                return Err(zero_distance(i, j));
            }
            total += delta * (G * mass / (r * r * r));
        }
        out.push(total);
    }
    Ok(out)
}

/// Time derivative of a flat n-body state.
///
/// For each body the output holds its velocity followed by its
/// acceleration, in the order of `state`. `t` is unused; the signature
/// matches the integrator's derivative function.
pub fn n_body(_t: f64, state: &Vector, masses: &[f64]) -> Result<Vector, SolarError> {
    check_layout(state, masses)?;
    let accel = accelerations(&positions(state), masses)?;
    let mut derivative = Vec::with_capacity(state.len());
    for (chunk, a) in state.as_slice().chunks_exact(STATE_STRIDE).zip(&accel) {
        derivative.extend_from_slice(&chunk[3..6]);
        derivative.extend_from_slice(&a.to_array());
    }
    Ok(Vector::new(derivative))
}
