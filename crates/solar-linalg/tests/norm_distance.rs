use solar_linalg::{distance, euclidean_to_spheric, norm, spheric_to_euclidean, Vector, Vector3};

#[test]
fn euclidean_norm() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(norm(&v, 2).unwrap(), 30f64.sqrt());
    let opposite = &v * -1.0;
    assert_eq!(norm(&v, 2).unwrap(), norm(&opposite, 2).unwrap());
}

#[test]
fn other_degrees() {
    let v = [1.0, -2.0, 3.0];
    assert_eq!(norm(&v, 1).unwrap(), 6.0);
    let cubic: f64 = norm(&v, 3).unwrap();
    assert!((cubic - 36f64.powf(1.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn non_positive_degree_is_a_domain_error() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(norm(&v, -5).unwrap_err().info().code, "non-positive-degree");
    assert!(norm(&v, 0).is_err());
}

#[test]
fn distance_properties() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let b = Vector::from_slice(&[5.0, 6.0, 7.0, 8.0]);
    assert_eq!(distance(&a, &a).unwrap(), 0.0);
    assert_eq!(distance(&a, &b).unwrap(), 8.0);
    assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    let c = Vector::from_slice(&[5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(distance(&a, &c).unwrap_err().info().code, "dimension-mismatch");
}

#[test]
fn spherical_round_trip() {
    let p = spheric_to_euclidean(2.0, 0.3, 1.1).unwrap();
    let s = euclidean_to_spheric(p).unwrap();
    assert!((s.radius - 2.0).abs() < 1e-12);
    assert!((s.phi - 0.3).abs() < 1e-12);
    assert!((s.theta - 1.1).abs() < 1e-12);
}

#[test]
fn spherical_edge_cases() {
    assert_eq!(spheric_to_euclidean(-1.0, 0.0, 0.0).unwrap_err().info().code, "negative-radius");
    assert!(euclidean_to_spheric(Vector3::zero()).is_err());
    let on_y_axis = euclidean_to_spheric(Vector3::new(0.0, 1.0, 0.0)).unwrap();
    assert_eq!(on_y_axis.phi, std::f64::consts::FRAC_PI_2);
    let behind = euclidean_to_spheric(Vector3::new(-1.0, 0.0, 0.0)).unwrap();
    assert!((behind.phi - std::f64::consts::PI).abs() < 1e-12);
}
