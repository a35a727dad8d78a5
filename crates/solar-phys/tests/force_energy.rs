use proptest::prelude::*;
use solar_linalg::{Vector, Vector3};
use solar_phys::{
    accelerations, flatten, gravitational_energy, hamiltonian, kinetic_energy, n_body, Body, G,
};

fn body(name: &str, mass: f64, p: [f64; 3], v: [f64; 3]) -> Body {
    Body::named(name, mass, p.into(), v.into()).unwrap()
}

#[test]
fn two_bodies_attract_each_other() {
    let bodies = vec![
        body("a", 1e24, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        body("b", 2e24, [1e8, 0.0, 0.0], [0.0, -1.0, 0.0]),
    ];
    let (state, masses) = flatten(&bodies).into_parts();
    let d = n_body(0.0, &state, &masses).unwrap();
    assert_eq!(d.len(), 12);
    assert_eq!(&d.as_slice()[0..3], &[0.0, 1.0, 0.0]);
    assert_eq!(&d.as_slice()[6..9], &[0.0, -1.0, 0.0]);

    let expected_a = G * 2e24 / 1e16;
    let expected_b = -G * 1e24 / 1e16;
    assert!((d[3] - expected_a).abs() <= 1e-12 * expected_a.abs());
    assert!((d[9] - expected_b).abs() <= 1e-12 * expected_b.abs());
    assert_eq!(d[4], 0.0);
    assert_eq!(d[11], 0.0);
}

#[test]
fn mass_count_must_match_the_state() {
    let err = n_body(0.0, &Vector::zeros(12), &[1.0]).unwrap_err();
    assert_eq!(err.info().code, "mass-count-mismatch");
    let err = n_body(0.0, &Vector::zeros(10), &[1.0]).unwrap_err();
    assert_eq!(err.info().code, "ragged-state");
}

#[test]
fn coincident_bodies_fail_with_zero_distance() {
    let positions = [Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 1.0)];
    let err = accelerations(&positions, &[1.0, 1.0]).unwrap_err();
    assert!(matches!(err, solar_core::SolarError::Numeric(_)));
    assert_eq!(err.info().code, "zero-distance");

    let bodies = vec![
        body("a", 1.0, [1.0, 1.0, 1.0], [0.0; 3]),
        body("b", 1.0, [1.0, 1.0, 1.0], [0.0; 3]),
    ];
    assert_eq!(
        gravitational_energy(&bodies).unwrap_err().info().code,
        "zero-distance"
    );
}

#[test]
fn a_lone_body_feels_no_force() {
    let state = Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let d = n_body(0.0, &state, &[5.0]).unwrap();
    assert_eq!(d.as_slice(), &[4.0, 5.0, 6.0, 0.0, 0.0, 0.0]);
}

#[test]
fn kinetic_energy_uses_momentum() {
    let bodies = vec![body("a", 2.0, [0.0; 3], [3.0, 4.0, 0.0])];
    assert!((kinetic_energy(&bodies).unwrap() - 25.0).abs() < 1e-12);
}

#[test]
fn potential_counts_each_pair_once() {
    let bodies = vec![
        body("a", 1.0, [0.0, 0.0, 0.0], [0.0; 3]),
        body("b", 2.0, [2.0, 0.0, 0.0], [0.0; 3]),
        body("c", 3.0, [0.0, 4.0, 0.0], [0.0; 3]),
    ];
    let bc = (4.0_f64 + 16.0).sqrt();
    let expected = -G * (1.0 * 2.0 / 2.0 + 1.0 * 3.0 / 4.0 + 2.0 * 3.0 / bc);
    let potential = gravitational_energy(&bodies).unwrap();
    assert!((potential - expected).abs() <= 1e-12 * expected.abs());
    assert_eq!(hamiltonian(&bodies).unwrap(), potential);
}

#[test]
fn empty_system_has_no_energy() {
    assert_eq!(hamiltonian(&[]).unwrap(), 0.0);
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1e3..1e3_f64
}

proptest! {
    #[test]
    fn internal_forces_conserve_momentum(
        raw in proptest::collection::vec(
            ((coordinate(), coordinate(), coordinate()), 1e3..1e6_f64),
            2..6,
        )
    ) {
        let positions: Vec<Vector3> = raw
            .iter()
            .map(|((x, y, z), _)| Vector3::new(*x, *y, *z))
            .collect();
        let masses: Vec<f64> = raw.iter().map(|(_, m)| *m).collect();
        prop_assume!(positions.iter().enumerate().all(|(i, p)| {
            positions[i + 1..].iter().all(|q| solar_linalg::distance(p, q).unwrap() > 1.0)
        }));
        let accel = accelerations(&positions, &masses).unwrap();
        let mut net = Vector3::zero();
        for (a, m) in accel.iter().zip(&masses) {
            net += *a * *m;
        }
        let mut scale = 0.0;
        for (i, p) in positions.iter().enumerate() {
            for (j, q) in positions.iter().enumerate() {
                if i != j {
                    let r = solar_linalg::distance(p, q).unwrap();
                    scale += G * masses[i] * masses[j] / (r * r);
                }
            }
        }
        let residual = solar_linalg::norm(&net, 2).unwrap();
        prop_assert!(residual <= 1e-12 * scale);
    }
}
