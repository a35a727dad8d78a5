use solar_core::{NameSource, SolarError};
use solar_linalg::Vector3;

use crate::body::{Body, BodyDescriptor};

/// A named, reusable set of initial conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Display name as given.
    pub name: String,
    /// Lookup key, see [`standardize_name`].
    pub standardized_name: String,
    /// The bodies, in integration order.
    pub system: Vec<Body>,
}

impl Preset {
    /// Wraps `system` under `name`.
    pub fn new(name: impl Into<String>, system: Vec<Body>) -> Self {
        let name = name.into();
        Self {
            standardized_name: standardize_name(&name),
            name,
            system,
        }
    }

    /// Whether `query` names this preset once standardized.
    pub fn matches(&self, query: &str) -> bool {
        self.standardized_name == standardize_name(query)
    }

    /// Record form of every body.
    pub fn descriptors(&self) -> Vec<BodyDescriptor> {
        self.system.iter().map(Body::to_descriptor).collect()
    }
}

/// Lowercases, trims and joins words with underscores.
///
/// `" I am a name "` becomes `"i_am_a_name"`.
pub fn standardize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Converts descriptors in order, naming unnamed entries from `names`.
pub fn bodies_from_descriptors<N>(
    descriptors: Vec<BodyDescriptor>,
    names: &mut N,
) -> Result<Vec<Body>, SolarError>
where
    N: NameSource + ?Sized,
{
    descriptors
        .into_iter()
        .map(|descriptor| descriptor.into_body(names))
        .collect()
}

// (name, mass kg, orbital radius m, orbital speed m/s)
const SOLAR_SYSTEM: [(&str, f64, f64, f64); 10] = [
    ("sun", 2e30, 0.0, 0.0),
    ("mercury", 3.285e23, 57.9e9, 47400.0),
    ("venus", 4.87e24, 108.2e9, 35000.0),
    ("earth", 5.97e24, 149.6e9, 29800.0),
    ("mars", 0.642e24, 227.9e9, 24100.0),
    ("jupiter", 1898e24, 778.6e9, 13100.0),
    ("saturn", 568e24, 1433.5e9, 9700.0),
    ("uranus", 86.8e24, 2872.5e9, 6835.0),
    ("neptune", 102e24, 4495.1e9, 5477.0),
    ("pluto", 0.146e24, 5906.4e9, 4748.0),
];

/// The sun, the eight planets and pluto.
///
/// Every body starts on the positive y axis moving along x, so all
/// orbits are in the xy plane and share one direction of rotation.
pub fn solar_system() -> Result<Preset, SolarError> {
    let system = SOLAR_SYSTEM
        .iter()
        .map(|&(name, mass, radius, speed)| {
            Body::named(
                name,
                mass,
                Vector3::new(0.0, radius, 0.0),
                Vector3::new(speed, 0.0, 0.0),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Preset::new("Solar System", system))
}
