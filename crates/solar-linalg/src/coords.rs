//! Conversions between spherical and euclidean coordinates in 3-D.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, SolarError};

use crate::vector3::Vector3;

/// Spherical coordinates with `phi` the azimuth and `theta` the polar angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f64,
    /// Azimuth in the x-y plane, radians.
    pub phi: f64,
    /// Angle from the +z axis, radians.
    pub theta: f64,
}

/// Converts spherical coordinates to `(x, y, z)`; the radius must be non-negative.
pub fn spheric_to_euclidean(radius: f64, phi: f64, theta: f64) -> Result<Vector3, SolarError> {
    if radius < 0.0 || !radius.is_finite() {
        return Err(SolarError::Domain(
            ErrorInfo::new("negative-radius", "radius must be finite and non-negative")
                .with_context("radius", radius),
        ));
    }
    Ok(Vector3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    ))
}

/// Converts `(x, y, z)` to spherical coordinates.
///
/// The azimuth follows the quadrant convention `atan(y/x)` shifted by pi for
/// negative x, and pi/2 on the x = 0 plane. The origin has no polar angle and
/// is rejected.
pub fn euclidean_to_spheric(point: Vector3) -> Result<Spherical, SolarError> {
    let (x, y, z) = (point.x(), point.y(), point.z());
    let radius = (x * x + y * y + z * z).sqrt();
    if radius == 0.0 {
        return Err(SolarError::domain(
            "origin-has-no-direction",
            "cannot express the origin in spherical coordinates",
        ));
    }
    let theta = (z / radius).acos();
    let phi = if x > 0.0 {
        (y / x).atan()
    } else if x < 0.0 {
        (y / x).atan() + PI
    } else {
        FRAC_PI_2
    };
    Ok(Spherical { radius, phi, theta })
}
