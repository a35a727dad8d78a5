use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, SolarError};
use solar_phys::SECONDS_PER_HOUR;
use solar_rk::Method;

/// Largest accepted number of integration steps.
pub const MAX_STEPS: usize = 100_000_000;

/// Relative slack under which `duration / step` counts as a whole number.
const WHOLE_STEP_TOLERANCE: f64 = 1e-9;

/// YAML-configurable parameters of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated span in hours.
    #[serde(default = "default_duration_hours")]
    pub duration_hours: f64,
    /// Nominal step in hours; the run uses `floor(duration / step)` equal steps.
    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
    /// Integration method.
    #[serde(default)]
    pub method: Method,
    /// Master seed for generated body names.
    #[serde(default)]
    pub name_seed: u64,
    /// Keep per-body position series; the energy series is always kept.
    #[serde(default = "default_record_trajectories")]
    pub record_trajectories: bool,
}

fn default_duration_hours() -> f64 {
    7200.0
}

fn default_step_hours() -> f64 {
    10.0
}

fn default_record_trajectories() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_hours: default_duration_hours(),
            step_hours: default_step_hours(),
            method: Method::default(),
            name_seed: 0,
            record_trajectories: default_record_trajectories(),
        }
    }
}

impl SimulationConfig {
    /// Config with the given span and step, everything else defaulted.
    pub fn with_span(duration_hours: f64, step_hours: f64) -> Self {
        Self {
            duration_hours,
            step_hours,
            ..Self::default()
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, SolarError> {
        serde_yaml::from_str(text).map_err(|err| {
            SolarError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Renders the config as YAML.
    pub fn to_yaml_string(&self) -> Result<String, SolarError> {
        serde_yaml::to_string(self)
            .map_err(|err| SolarError::Serde(ErrorInfo::new("yaml-encode", err.to_string())))
    }

    /// Requires a finite, positive duration and a step in `(0, duration]`.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !(self.duration_hours.is_finite() && self.duration_hours > 0.0) {
            return Err(SolarError::Domain(
                ErrorInfo::new("non-positive-duration", "duration must be strictly positive")
                    .with_context("duration_hours", self.duration_hours),
            ));
        }
        if !(self.step_hours.is_finite()
            && self.step_hours > 0.0
            && self.step_hours <= self.duration_hours)
        {
            return Err(SolarError::Domain(
                ErrorInfo::new("step-out-of-range", "step must lie in (0, duration]")
                    .with_context("step_hours", self.step_hours)
                    .with_context("duration_hours", self.duration_hours),
            ));
        }
        if self.step_ratio() > MAX_STEPS as f64 {
            return Err(SolarError::Domain(
                ErrorInfo::new("too-many-steps", "duration / step exceeds the step limit")
                    .with_context("duration_hours", self.duration_hours)
                    .with_context("step_hours", self.step_hours)
                    .with_context("limit", MAX_STEPS),
            ));
        }
        Ok(())
    }

    /// `duration / step`, snapped to the nearest integer when it is one up
    /// to rounding, so `0.3 / 0.1` counts as 3.
    fn step_ratio(&self) -> f64 {
        let ratio = self.duration_hours / self.step_hours;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= WHOLE_STEP_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            ratio.floor()
        }
    }

    /// Number of integration steps, `floor(duration / step)`, with
    /// ratios that are whole up to rounding counted exactly.
    ///
    /// Meaningful for validated configs only.
    pub fn steps(&self) -> usize {
        self.step_ratio() as usize
    }

    /// Duration converted to seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_hours * SECONDS_PER_HOUR
    }
}
