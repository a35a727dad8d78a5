use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, RunProvenance, SchemaVersion, SolarError};
use solar_phys::BodyDescriptor;
use solar_rk::Method;

use crate::config::SimulationConfig;
use crate::hash::stable_hash_string;

/// Hamiltonian at one recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    /// Step index, `0` for the initial state.
    pub index: usize,
    /// Simulated time in hours.
    pub time_hours: f64,
    /// Total energy in joules.
    pub hamiltonian: f64,
    /// Change since the previous sample; zero for the first.
    pub delta: f64,
}

/// Position series of one body, one entry per recorded step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Body name.
    pub name: String,
    /// x components.
    pub x: Vec<f64>,
    /// y components.
    pub y: Vec<f64>,
    /// z components.
    pub z: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn new(name: &str, capacity: usize) -> Self {
        Self {
            name: name.to_string(),
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Complete, self-describing artefact of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Layout version of this payload.
    pub schema: SchemaVersion,
    /// Stable hash over every other field.
    pub report_hash: String,
    /// Inputs and tool versions.
    pub provenance: RunProvenance,
    /// Configuration the run used.
    pub config: SimulationConfig,
    /// Number of integration steps.
    pub steps: usize,
    /// Initial bodies in integration order.
    pub initial_bodies: Vec<BodyDescriptor>,
    /// Bodies after the last step.
    pub final_bodies: Vec<BodyDescriptor>,
    /// Per-body position series; empty when trajectories were not recorded.
    pub trajectories: Vec<Trajectory>,
    /// One sample per recorded state.
    pub energy: Vec<EnergySample>,
}

impl SimulationReport {
    /// Method the run was integrated with.
    pub fn method(&self) -> Method {
        self.config.method
    }

    /// Hash of the report with `report_hash` cleared.
    pub fn compute_hash(&self) -> Result<String, SolarError> {
        let mut unsigned = self.clone();
        unsigned.report_hash.clear();
        stable_hash_string(&unsigned)
    }

    /// Fills in `report_hash`.
    pub fn seal(mut self) -> Result<Self, SolarError> {
        self.report_hash = self.compute_hash()?;
        Ok(self)
    }

    /// Whether `report_hash` matches the content.
    pub fn verify_hash(&self) -> Result<bool, SolarError> {
        Ok(self.compute_hash()? == self.report_hash)
    }

    /// `(H_last - H_0) / |H_0|`, or `None` without samples or with `H_0 == 0`.
    pub fn relative_drift(&self) -> Option<f64> {
        let first = self.energy.first()?.hamiltonian;
        let last = self.energy.last()?.hamiltonian;
        (first != 0.0).then(|| (last - first) / first.abs())
    }

    /// Decodes a JSON report, rejecting schema versions this build cannot read.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SolarError> {
        let report: Self = serde_json::from_slice(bytes)
            .map_err(|err| SolarError::Serde(ErrorInfo::new("json-read", err.to_string())))?;
        if !SchemaVersion::CURRENT.reads(&report.schema) {
            return Err(SolarError::Serde(
                ErrorInfo::new("unsupported-schema", "report schema is newer than this build")
                    .with_context("found", report.schema)
                    .with_context("supported", SchemaVersion::CURRENT),
            ));
        }
        Ok(report)
    }
}
