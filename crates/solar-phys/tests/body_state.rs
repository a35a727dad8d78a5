use solar_core::{RandomNames, SequentialNames, SolarError};
use solar_linalg::{Vector, Vector3};
use solar_phys::{
    flatten, flatten_with_mass, unflatten, unflatten_with_mass, Body, BodyDescriptor,
    SystemState,
};

fn body(name: &str, mass: f64, p: [f64; 3], v: [f64; 3]) -> Body {
    Body::named(name, mass, p.into(), v.into()).unwrap()
}

fn pair() -> Vec<Body> {
    vec![
        body("a", 1.0, [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]),
        body("b", 2.0, [7.0, 8.0, 9.0], [10.0, 11.0, 12.0]),
    ]
}

#[test]
fn non_positive_mass_is_a_domain_error() {
    let mut names = SequentialNames::new("body");
    for mass in [0.0, -1.0, f64::NAN] {
        let err = Body::new(mass, &[0.0; 3], &[0.0; 3], None, &mut names).unwrap_err();
        assert!(matches!(err, SolarError::Domain(_)));
        assert_eq!(err.info().code, "non-positive-mass");
    }
}

#[test]
fn four_dimensional_vectors_are_rejected() {
    let mut names = SequentialNames::new("body");
    let err = Body::new(1.0, &[0.0; 4], &[0.0; 3], None, &mut names).unwrap_err();
    assert!(matches!(err, SolarError::Domain(_)));
    assert_eq!(err.info().code, "not-three-dimensional");
    assert_eq!(err.info().context["field"], "position");

    let err = Body::new(1.0, &[0.0; 3], &[0.0; 4], None, &mut names).unwrap_err();
    assert_eq!(err.info().context["field"], "velocity");
}

#[test]
fn setters_revalidate_dimension() {
    let mut b = pair().remove(0);
    b.set_position(&[0.5, 0.5, 0.5]).unwrap();
    assert_eq!(b.position(), Vector3::new(0.5, 0.5, 0.5));
    assert!(b.set_velocity(&[1.0, 2.0]).is_err());
    assert_eq!(b.velocity(), Vector3::new(4.0, 5.0, 6.0));
}

#[test]
fn missing_names_come_from_the_source() {
    let mut names = SequentialNames::new("body");
    let first = Body::new(1.0, &[0.0; 3], &[0.0; 3], None, &mut names).unwrap();
    let named = Body::new(1.0, &[0.0; 3], &[0.0; 3], Some("x".into()), &mut names).unwrap();
    let second = Body::new(1.0, &[0.0; 3], &[0.0; 3], None, &mut names).unwrap();
    assert_eq!(first.name(), "body-0");
    assert_eq!(named.name(), "x");
    assert_eq!(second.name(), "body-1");

    let mut random = RandomNames::from_seed(9);
    let generated = Body::new(1.0, &[0.0; 3], &[0.0; 3], None, &mut random).unwrap();
    assert!(generated.name().starts_with('@'));
    assert_eq!(generated.name().len(), 8);
}

#[test]
fn body_flattens_to_mass_position_velocity() {
    let b = pair().remove(1);
    assert_eq!(b.flatten(), [2.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    assert_eq!(Body::from_flat("b", &b.flatten()).unwrap(), b);
    assert!(Body::from_flat("b", &[1.0; 6]).is_err());
}

#[test]
fn flatten_splits_masses_from_the_state() {
    let system = flatten(&pair());
    assert_eq!(system.state().len(), 12);
    assert_eq!(system.masses(), &[1.0, 2.0]);
    assert_eq!(system.state()[6], 7.0);
    assert_eq!(system.state()[11], 12.0);
}

#[test]
fn flattening_nothing_gives_the_empty_state() {
    let system = flatten(&[]);
    assert!(system.state().is_empty());
    assert!(system.masses().is_empty());
    assert_eq!(system.body_count(), 0);
    assert!(flatten_with_mass(&[]).is_empty());
}

#[test]
fn unflatten_restores_bodies_in_order() {
    let bodies = pair();
    let (state, masses) = flatten(&bodies).into_parts();
    let back = unflatten(&state, &masses, &["a", "b"]).unwrap();
    assert_eq!(back, bodies);

    let inline = flatten_with_mass(&bodies);
    assert_eq!(inline.len(), 14);
    assert_eq!(unflatten_with_mass(&inline, &["a", "b"]).unwrap(), bodies);
}

#[test]
fn state_layout_is_checked() {
    let err = SystemState::new(Vector::zeros(7), vec![1.0]).unwrap_err();
    assert_eq!(err.info().code, "ragged-state");
    let err = SystemState::new(Vector::zeros(12), vec![1.0]).unwrap_err();
    assert_eq!(err.info().code, "mass-count-mismatch");
    let err = unflatten(&Vector::zeros(6), &[1.0], &["a", "b"]).unwrap_err();
    assert_eq!(err.info().code, "name-count-mismatch");
    let err = unflatten(&Vector::zeros(6), &[0.0], &["a"]).unwrap_err();
    assert_eq!(err.info().code, "non-positive-mass");
}

#[test]
fn descriptors_round_trip_through_json() {
    let b = pair().remove(0);
    let json = serde_json::to_string(&b.to_descriptor()).unwrap();
    let descriptor: BodyDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(Body::try_from(descriptor).unwrap(), b);
}

#[test]
fn unnamed_descriptors_need_a_name_source() {
    let descriptor: BodyDescriptor =
        serde_json::from_str(r#"{"position":[0,0,0],"velocity":[1,0,0],"mass":3.5}"#).unwrap();
    assert_eq!(
        Body::try_from(descriptor.clone()).unwrap_err().info().code,
        "missing-name"
    );
    let b = descriptor
        .into_body(&mut SequentialNames::new("anon"))
        .unwrap();
    assert_eq!(b.name(), "anon-0");
    assert_eq!(b.mass(), 3.5);
}
