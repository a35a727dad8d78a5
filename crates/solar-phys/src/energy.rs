use solar_core::SolarError;
use solar_linalg::norm;

use crate::body::Body;
use crate::constants::G;
use crate::force::zero_distance;

/// `sum |m v|^2 / (2 m)` over all bodies.
pub fn kinetic_energy(bodies: &[Body]) -> Result<f64, SolarError> {
    bodies.iter().try_fold(0.0, |acc, body| {
        let p = norm(&body.momentum(), 2)?;
        Ok(acc + p * p / (2.0 * body.mass()))
    })
}

/// `-sum_{i<j} G m_i m_j / |p_i - p_j|`, each pair counted once.
pub fn gravitational_energy(bodies: &[Body]) -> Result<f64, SolarError> {
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            let r = norm(&(a.position() - b.position()), 2)?;
            if r == 0.0 {
                return Err(zero_distance(i, j));
            }
            total -= G * a.mass() * b.mass() / r;
        }
    }
    Ok(total)
}

/// Total mechanical energy, kinetic plus potential.
pub fn hamiltonian(bodies: &[Body]) -> Result<f64, SolarError> {
    Ok(kinetic_energy(bodies)? + gravitational_energy(bodies)?)
}
