use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use solar_core::{ErrorInfo, RandomNames, SolarError};
use solar_phys::{bodies_from_descriptors, hamiltonian, solar_system, Body, BodyDescriptor};
use solar_rk::Method;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::driver::Simulator;
use crate::hash::to_canonical_json_bytes;
use crate::report::SimulationReport;

/// Command-line values that take precedence over the YAML configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    /// Replaces `duration_hours`.
    pub duration_hours: Option<f64>,
    /// Replaces `step_hours`.
    pub step_hours: Option<f64>,
    /// Replaces `method`.
    pub method: Option<Method>,
    /// Replaces `name_seed`.
    pub seed: Option<u64>,
}

impl Overrides {
    /// Writes every present value into `config`.
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(duration) = self.duration_hours {
            config.duration_hours = duration;
        }
        if let Some(step) = self.step_hours {
            config.step_hours = step;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(seed) = self.seed {
            config.name_seed = seed;
        }
    }
}

/// Where the bodies of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// JSON array of body descriptors.
    File(PathBuf),
    /// Built-in set, matched by standardized name (`solar-system`).
    Preset(String),
}

/// Files written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Canonical JSON report.
    pub report: PathBuf,
    /// One CSV row per energy sample.
    pub energy: PathBuf,
    /// Effective configuration as YAML.
    pub config: PathBuf,
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> SolarError {
    SolarError::Config(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

fn csv_error(path: &Path, err: csv::Error) -> SolarError {
    SolarError::Serde(
        ErrorInfo::new("csv-encode", err.to_string()).with_context("path", path.display()),
    )
}

/// Reads the YAML file when given, else the defaults, then applies `overrides`.
pub fn load_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<SimulationConfig, SolarError> {
    let mut config = match path {
        Some(path) => {
            let text =
                fs::read_to_string(path).map_err(|err| io_error("config-read", path, err))?;
            SimulationConfig::from_yaml_str(&text)?
        }
        None => SimulationConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

/// Loads the bodies of a run.
///
/// Unnamed descriptors draw names from substream 0 of `config.name_seed`,
/// so the same file and seed always produce the same names.
pub fn load_bodies(
    source: &BodySource,
    config: &SimulationConfig,
) -> Result<Vec<Body>, SolarError> {
    match source {
        BodySource::File(path) => {
            let bytes = fs::read(path).map_err(|err| io_error("bodies-read", path, err))?;
            let descriptors: Vec<BodyDescriptor> =
                serde_json::from_slice(&bytes).map_err(|err| {
                    SolarError::Serde(
                        ErrorInfo::new("bodies-parse", err.to_string())
                            .with_context("path", path.display()),
                    )
                })?;
            debug!(count = descriptors.len(), path = %path.display(), "bodies loaded");
            let mut names = RandomNames::substream(config.name_seed, 0);
            bodies_from_descriptors(descriptors, &mut names)
        }
        BodySource::Preset(name) => {
            let preset = solar_system()?;
            if !preset.matches(&name.replace('-', " ")) {
                return Err(SolarError::Config(
                    ErrorInfo::new("unknown-preset", "no built-in body set has this name")
                        .with_context("preset", name)
                        .with_hint("use `solar-system`"),
                ));
            }
            Ok(preset.system)
        }
    }
}

/// Validated simulator for the given inputs.
pub fn prepare(
    config_path: Option<&Path>,
    source: &BodySource,
    overrides: &Overrides,
) -> Result<Simulator, SolarError> {
    let config = load_config(config_path, overrides)?;
    let bodies = load_bodies(source, &config)?;
    Simulator::new(bodies, config)
}

/// Summary printed by `check`: body count, step count, method, initial
/// energy and input hash.
pub fn check_summary(simulator: &Simulator) -> Result<Value, SolarError> {
    Ok(json!({
        "bodies": simulator.bodies().len(),
        "steps": simulator.config().steps(),
        "method": simulator.config().method,
        "initial_hamiltonian": hamiltonian(simulator.bodies())?,
        "input_hash": simulator.input_hash()?,
    }))
}

/// Writes the energy series with a header row.
pub fn write_energy_csv(path: &Path, report: &SimulationReport) -> Result<(), SolarError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| csv_error(path, err))?;
    for sample in &report.energy {
        writer.serialize(sample).map_err(|err| csv_error(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| io_error("energy-write", path, err))
}

/// Writes `report.json`, `energy.csv` and `config.yaml` under `out`.
pub fn write_artifacts(
    out: &Path,
    report: &SimulationReport,
) -> Result<ArtifactPaths, SolarError> {
    fs::create_dir_all(out).map_err(|err| io_error("out-create", out, err))?;
    let paths = ArtifactPaths {
        report: out.join("report.json"),
        energy: out.join("energy.csv"),
        config: out.join("config.yaml"),
    };
    fs::write(&paths.report, to_canonical_json_bytes(report)?)
        .map_err(|err| io_error("report-write", &paths.report, err))?;
    write_energy_csv(&paths.energy, report)?;
    fs::write(&paths.config, report.config.to_yaml_string()?)
        .map_err(|err| io_error("config-write", &paths.config, err))?;
    Ok(paths)
}
