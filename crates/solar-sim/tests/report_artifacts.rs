use std::fs;

use solar_core::SchemaVersion;
use solar_linalg::Vector3;
use solar_phys::Body;
use solar_rk::Method;
use solar_sim::{to_canonical_json_bytes, SimulationConfig, SimulationReport, Simulator};
use tempfile::tempdir;

fn completed(config: SimulationConfig) -> Simulator {
    let bodies = vec![
        Body::named("sun", 2e30, Vector3::zero(), Vector3::zero()).unwrap(),
        Body::named(
            "mars",
            0.642e24,
            Vector3::new(0.0, 227.9e9, 0.0),
            Vector3::new(24100.0, 0.0, 0.0),
        )
        .unwrap(),
    ];
    let mut simulator = Simulator::new(bodies, config).unwrap();
    simulator.run(|_| {}, || {}).unwrap();
    simulator
}

#[test]
fn identical_runs_produce_identical_reports() {
    let a = completed(SimulationConfig::with_span(200.0, 10.0)).report().unwrap();
    let b = completed(SimulationConfig::with_span(200.0, 10.0)).report().unwrap();
    assert_eq!(a.report_hash, b.report_hash);
    assert_eq!(a.report_hash.len(), 64);
    assert!(a.verify_hash().unwrap());
    assert_eq!(a.schema, SchemaVersion::CURRENT);
    assert_eq!(a.steps, 20);
    assert_eq!(a.energy.len(), 21);
    assert_eq!(a.final_bodies.len(), 2);
    assert!(a.relative_drift().unwrap().abs() < 1e-8);
}

#[test]
fn changing_the_method_changes_the_hashes() {
    let mut config = SimulationConfig::with_span(200.0, 10.0);
    let rk4 = completed(config.clone()).report().unwrap();
    config.method = Method::Heun;
    let heun = completed(config).report().unwrap();
    assert_ne!(rk4.provenance.input_hash, heun.provenance.input_hash);
    assert_ne!(rk4.report_hash, heun.report_hash);
    assert_eq!(heun.method(), Method::Heun);
}

#[test]
fn tampering_is_detected() {
    let mut report = completed(SimulationConfig::with_span(100.0, 10.0)).report().unwrap();
    report.energy[3].index = 99;
    assert!(!report.verify_hash().unwrap());
}

#[test]
fn reports_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = completed(SimulationConfig::with_span(100.0, 10.0)).report().unwrap();
    fs::write(&path, to_canonical_json_bytes(&report).unwrap()).unwrap();
    let back = SimulationReport::from_json_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(back, report);
    assert!(back.verify_hash().unwrap());
}

#[test]
fn newer_schemas_are_refused() {
    let mut report = completed(SimulationConfig::with_span(100.0, 10.0)).report().unwrap();
    report.schema = SchemaVersion::new(2, 0, 0);
    let bytes = to_canonical_json_bytes(&report).unwrap();
    let err = SimulationReport::from_json_slice(&bytes).unwrap_err();
    assert_eq!(err.info().code, "unsupported-schema");
}

#[test]
fn config_files_round_trip_and_default_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut config = SimulationConfig::with_span(48.0, 2.0);
    config.method = Method::ThreeEighths;
    config.name_seed = 7;
    fs::write(&path, config.to_yaml_string().unwrap()).unwrap();
    let back = SimulationConfig::from_yaml_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, config);

    let partial = SimulationConfig::from_yaml_str("step_hours: 5\nmethod: euler\n").unwrap();
    assert_eq!(partial.duration_hours, 7200.0);
    assert_eq!(partial.step_hours, 5.0);
    assert_eq!(partial.method, Method::Euler);
    assert!(partial.record_trajectories);

    let err = SimulationConfig::from_yaml_str("method: leapfrog\n").unwrap_err();
    assert_eq!(err.info().code, "config-parse");
}
