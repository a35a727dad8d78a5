use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, NameSource, SolarError};
use solar_linalg::Vector3;

/// Width of [`Body::flatten`]: mass, position and velocity.
pub const FLAT_BODY_LEN: usize = 7;

/// A point mass moving in three dimensions.
///
/// The mass is fixed at construction. Position and velocity can only be
/// replaced as a whole, and every replacement is checked again.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    position: Vector3,
    velocity: Vector3,
}

fn check_mass(mass: f64) -> Result<f64, SolarError> {
    if !(mass.is_finite() && mass > 0.0) {
        return Err(SolarError::Domain(
            ErrorInfo::new("non-positive-mass", "body mass must be finite and strictly positive")
                .with_context("mass", mass),
        ));
    }
    Ok(mass)
}

fn three_d(field: &str, values: &[f64]) -> Result<Vector3, SolarError> {
    Vector3::try_from_slice(values).map_err(|_| {
        SolarError::Domain(
            ErrorInfo::new("not-three-dimensional", "body vectors must have exactly 3 components")
                .with_context("field", field)
                .with_context("found", values.len()),
        )
    })
}

impl Body {
    /// Builds a body with an explicit name.
    pub fn named(
        name: impl Into<String>,
        mass: f64,
        position: Vector3,
        velocity: Vector3,
    ) -> Result<Self, SolarError> {
        Ok(Self {
            name: name.into(),
            mass: check_mass(mass)?,
            position,
            velocity,
        })
    }

    /// Builds a body from raw components, drawing a name from `names`
    /// when none is given.
    pub fn new<N>(
        mass: f64,
        position: &[f64],
        velocity: &[f64],
        name: Option<String>,
        names: &mut N,
    ) -> Result<Self, SolarError>
    where
        N: NameSource + ?Sized,
    {
        let name = name.unwrap_or_else(|| names.next_name());
        Self::from_parts(name, mass, position, velocity)
    }

    fn from_parts(
        name: String,
        mass: f64,
        position: &[f64],
        velocity: &[f64],
    ) -> Result<Self, SolarError> {
        Ok(Self {
            name,
            mass: check_mass(mass)?,
            position: three_d("position", position)?,
            velocity: three_d("velocity", velocity)?,
        })
    }

    /// Rebuilds a body from the 7-tuple produced by [`Body::flatten`].
    pub fn from_flat(name: impl Into<String>, values: &[f64]) -> Result<Self, SolarError> {
        if values.len() != FLAT_BODY_LEN {
            return Err(SolarError::dimension_mismatch(FLAT_BODY_LEN, values.len()));
        }
        Self::named(
            name,
            values[0],
            three_d("position", &values[1..4])?,
            three_d("velocity", &values[4..7])?,
        )
    }

    /// Identifier, unique only by convention.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Position in metres.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Velocity in metres per second.
    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Replaces the position; anything but 3 components is rejected.
    pub fn set_position(&mut self, position: &[f64]) -> Result<(), SolarError> {
        self.position = three_d("position", position)?;
        Ok(())
    }

    /// Replaces the velocity; anything but 3 components is rejected.
    pub fn set_velocity(&mut self, velocity: &[f64]) -> Result<(), SolarError> {
        self.velocity = three_d("velocity", velocity)?;
        Ok(())
    }

    /// `(m, px, py, pz, vx, vy, vz)`.
    pub fn flatten(&self) -> [f64; FLAT_BODY_LEN] {
        let [px, py, pz] = self.position.to_array();
        let [vx, vy, vz] = self.velocity.to_array();
        [self.mass, px, py, pz, vx, vy, vz]
    }

    /// Named record form of this body.
    pub fn to_descriptor(&self) -> BodyDescriptor {
        BodyDescriptor {
            name: Some(self.name.clone()),
            position: self.position.to_array().to_vec(),
            velocity: self.velocity.to_array().to_vec(),
            mass: self.mass,
        }
    }
}

/// Plain record form of a [`Body`] exchanged with persistence layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Missing names are generated on conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Three position components.
    pub position: Vec<f64>,
    /// Three velocity components.
    pub velocity: Vec<f64>,
    /// Strictly positive mass.
    pub mass: f64,
}

impl BodyDescriptor {
    /// Validates the record and builds the body it describes.
    pub fn into_body<N>(self, names: &mut N) -> Result<Body, SolarError>
    where
        N: NameSource + ?Sized,
    {
        Body::new(self.mass, &self.position, &self.velocity, self.name, names)
    }
}

impl TryFrom<BodyDescriptor> for Body {
    type Error = SolarError;

    /// Requires the descriptor to carry a name; use
    /// [`BodyDescriptor::into_body`] to generate one.
    fn try_from(descriptor: BodyDescriptor) -> Result<Self, SolarError> {
        let Some(name) = descriptor.name else {
            return Err(SolarError::Domain(
                ErrorInfo::new("missing-name", "descriptor has no name")
                    .with_hint("convert with BodyDescriptor::into_body and a NameSource"),
            ));
        };
        Body::from_parts(
            name,
            descriptor.mass,
            &descriptor.position,
            &descriptor.velocity,
        )
    }
}
