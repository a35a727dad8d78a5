#![deny(missing_docs)]
//! Simulation driver for the SOLAR engine: validates a body set, integrates
//! it with a Runge-Kutta method under Newtonian gravity and collects
//! trajectories, the energy series and a hashed run report.

/// Input loading and artefact writing behind the `solar-sim` binary.
pub mod cli;
/// YAML run configuration.
pub mod config;
/// The stateful simulation driver and the one-shot `run` entry point.
pub mod driver;
/// Canonical JSON encoding and stable hashes.
pub mod hash;
/// Serializable run artefacts.
pub mod report;

pub use config::{SimulationConfig, MAX_STEPS};
pub use driver::{run, Simulator};
pub use hash::{stable_hash_string, to_canonical_json_bytes};
pub use report::{EnergySample, SimulationReport, Trajectory};
