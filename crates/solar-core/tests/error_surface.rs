use solar_core::errors::{ErrorInfo, SolarError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("expected", 3)
        .with_context("found", 4)
}

#[test]
fn shape_error_surface() {
    let err = SolarError::Shape(sample_info("dimension-mismatch", "lengths differ"));
    assert_eq!(err.info().code, "dimension-mismatch");
    assert_eq!(err.info().context.get("expected").map(String::as_str), Some("3"));
}

#[test]
fn domain_error_surface() {
    let err = SolarError::domain("non-positive-mass", "mass must be strictly positive");
    assert_eq!(err.info().code, "non-positive-mass");
    assert!(err.info().context.is_empty());
}

#[test]
fn dimension_mismatch_helper_records_both_sides() {
    let err = SolarError::dimension_mismatch(4, 5);
    assert!(matches!(err, SolarError::Shape(_)));
    assert_eq!(err.info().context["expected"], "4");
    assert_eq!(err.info().context["found"], "5");
}

#[test]
fn display_includes_context_and_hint() {
    let err = SolarError::Sequence(
        ErrorInfo::new("results-unavailable", "run has not completed")
            .with_context("state", "idle")
            .with_hint("call run() first"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        concat!(
            "sequence error: run has not completed (code: results-unavailable)",
            " | context: [state=idle] | hint: call run() first"
        )
    );
}

#[test]
fn errors_round_trip_through_json() {
    let err = SolarError::Numeric(sample_info("zero-distance", "coincident bodies"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Numeric\""));
    let decoded: SolarError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
