#![deny(missing_docs)]
//! Shared error taxonomy, body name sources and provenance descriptors for
//! the SOLAR n-body engine.

pub mod errors;
pub mod names;
pub mod provenance;

pub use errors::{ErrorInfo, SolarError};
pub use names::{derive_substream_seed, NameSource, RandomNames, SequentialNames};
pub use provenance::{RunProvenance, SchemaVersion};

/// Convenience alias used throughout the workspace.
pub type Result<T, E = SolarError> = std::result::Result<T, E>;
