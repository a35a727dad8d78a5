use std::collections::BTreeMap;

use solar_core::{ErrorInfo, RunProvenance, SchemaVersion, SolarError};
use solar_linalg::Vector;
use solar_phys::{flatten, hamiltonian, n_body, unflatten, Body, SECONDS_PER_HOUR};
use solar_rk::{ButcherTableau, RungeKutta};
use tracing::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::hash::stable_hash_string;
use crate::report::{EnergySample, SimulationReport, Trajectory};

/// Upper bound on samples reserved before a run starts; longer runs grow.
const PREALLOCATED_SAMPLES: usize = 1 << 16;

#[derive(Debug, Clone)]
struct RunResults {
    trajectories: Vec<Trajectory>,
    energy: Vec<EnergySample>,
    final_bodies: Vec<Body>,
}

/// Runs one validated body set under one configuration.
///
/// Results exist only after [`Simulator::run`] has returned `Ok`; a failed
/// run clears them again.
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    config: SimulationConfig,
    results: Option<RunResults>,
}

fn check_unique_positions(bodies: &[Body]) -> Result<(), SolarError> {
    for (i, a) in bodies.iter().enumerate() {
        if let Some(b) = bodies[i + 1..]
            .iter()
            .find(|b| b.position().to_array() == a.position().to_array())
        {
            return Err(SolarError::Domain(
                ErrorInfo::new("duplicate-position", "two bodies share an initial position")
                    .with_context("first", a.name())
                    .with_context("second", b.name())
                    .with_context("position", a.position()),
            ));
        }
    }
    Ok(())
}

fn results_unavailable(what: &str) -> SolarError {
    SolarError::Sequence(
        ErrorInfo::new("results-unavailable", "no completed run to read results from")
            .with_context("requested", what)
            .with_hint("call Simulator::run first"),
    )
}

impl Simulator {
    /// Validates the configuration and the bodies; nothing is integrated yet.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self, SolarError> {
        config.validate()?;
        check_unique_positions(&bodies)?;
        Ok(Self {
            bodies,
            config,
            results: None,
        })
    }

    /// Initial bodies.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Whether a run has completed.
    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    /// Integrates the whole configured span.
    ///
    /// `on_step` receives every index from `0` to `steps` inclusive, after
    /// that state has been recorded; `on_complete` runs once after the
    /// last one. Both run on the calling thread.
    pub fn run<S, C>(&mut self, mut on_step: S, on_complete: C) -> Result<(), SolarError>
    where
        S: FnMut(usize),
        C: FnOnce(),
    {
        self.results = None;
        let steps = self.config.steps();
        let method = self.config.method;
        info!(
            bodies = self.bodies.len(),
            steps,
            method = method.name(),
            duration_hours = self.config.duration_hours,
            "starting simulation"
        );

        let names: Vec<&str> = self.bodies.iter().map(Body::name).collect();
        let (state, masses) = flatten(&self.bodies).into_parts();
        let integrator =
            RungeKutta::new(method, state, 0.0, self.config.duration_seconds(), steps)?
                .with_params(masses.clone());
        debug!(step_seconds = integrator.step_size(), "integrator ready");

        let reserved = steps.saturating_add(1).min(PREALLOCATED_SAMPLES);
        let mut trajectories: Vec<Trajectory> = if self.config.record_trajectories {
            names
                .iter()
                .map(|name| Trajectory::new(name, reserved))
                .collect()
        } else {
            Vec::new()
        };
        let mut energy: Vec<EnergySample> = Vec::with_capacity(reserved);
        let mut current = self.bodies.clone();
        let sequence =
            integrator.run(|t, y: &Vector, masses: &Vec<f64>| n_body(t, y, masses))?;
        for step in sequence {
            let step = step?;
            current = unflatten(&step.state, &masses, &names)?;
            let value = hamiltonian(&current)?;
            let delta = energy
                .last()
                .map_or(0.0, |prev| value - prev.hamiltonian);
            for (trajectory, body) in trajectories.iter_mut().zip(&current) {
                let [x, y, z] = body.position().to_array();
                trajectory.x.push(x);
                trajectory.y.push(y);
                trajectory.z.push(z);
            }
            trace!(
                index = step.index,
                time = step.time,
                hamiltonian = value,
                delta,
                "step"
            );
            energy.push(EnergySample {
                index: step.index,
                time_hours: step.time / SECONDS_PER_HOUR,
                hamiltonian: value,
                delta,
            });
            on_step(step.index);
        }

        if let (Some(first), Some(last)) = (energy.first(), energy.last()) {
            info!(
                initial = first.hamiltonian,
                last = last.hamiltonian,
                last_delta = last.delta,
                "simulation finished"
            );
        }
        self.results = Some(RunResults {
            trajectories,
            energy,
            final_bodies: current,
        });
        on_complete();
        Ok(())
    }

    fn results(&self, what: &str) -> Result<&RunResults, SolarError> {
        self.results.as_ref().ok_or_else(|| results_unavailable(what))
    }

    /// Per-body position series, in body order.
    pub fn trajectories(&self) -> Result<&[Trajectory], SolarError> {
        Ok(&self.results("trajectories")?.trajectories)
    }

    /// Energy samples in step order.
    pub fn energy(&self) -> Result<&[EnergySample], SolarError> {
        Ok(&self.results("energy")?.energy)
    }

    /// Bodies after the last step.
    pub fn final_bodies(&self) -> Result<&[Body], SolarError> {
        Ok(&self.results("final_bodies")?.final_bodies)
    }

    /// Hash of the initial bodies and the configuration.
    pub fn input_hash(&self) -> Result<String, SolarError> {
        let descriptors: Vec<_> = self.bodies.iter().map(Body::to_descriptor).collect();
        stable_hash_string(&(&descriptors, &self.config))
    }

    /// Builds the sealed report of the completed run.
    pub fn report(&self) -> Result<SimulationReport, SolarError> {
        let results = self.results("report")?;
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        SimulationReport {
            schema: SchemaVersion::CURRENT,
            report_hash: String::new(),
            provenance: RunProvenance {
                input_hash: self.input_hash()?,
                seed: self.config.name_seed,
                created_at: None,
                tool_versions,
            },
            config: self.config.clone(),
            steps: self.config.steps(),
            initial_bodies: self.bodies.iter().map(Body::to_descriptor).collect(),
            final_bodies: results.final_bodies.iter().map(Body::to_descriptor).collect(),
            trajectories: results.trajectories.clone(),
            energy: results.energy.clone(),
        }
        .seal()
    }
}

/// One-shot entry point: span and step in hours, RK4, default options.
///
/// Returns the completed simulator so its results can be queried.
pub fn run<S, C>(
    bodies: Vec<Body>,
    duration_hours: f64,
    step_hours: f64,
    on_step: S,
    on_complete: C,
) -> Result<Simulator, SolarError>
where
    S: FnMut(usize),
    C: FnOnce(),
{
    let config = SimulationConfig::with_span(duration_hours, step_hours);
    let mut simulator = Simulator::new(bodies, config)?;
    simulator.run(on_step, on_complete)?;
    Ok(simulator)
}
