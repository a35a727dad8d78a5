use solar_core::SolarError;
use solar_linalg::Vector;
use solar_rk::{Erk4, ExplicitEuler, Heun, Method, RungeKutta, ThreeEighths};

fn growth(_t: f64, y: &Vector, _: &()) -> Result<Vector, SolarError> {
    Ok(y.clone())
}

fn final_state<M: solar_rk::ButcherTableau>(method: M, steps: usize) -> f64 {
    let rk = RungeKutta::new(method, Vector::from([1.0]), 0.0, 1.0, steps).unwrap();
    let last = rk.run(growth).unwrap().last().unwrap().unwrap();
    assert!((last.time - 1.0).abs() < 1e-12);
    last.state[0]
}

#[test]
fn rk4_tracks_exponential_growth() {
    let y = final_state(Erk4, 10);
    assert!((y - std::f64::consts::E).abs() < 1e-5, "rk4 gave {y}");
}

#[test]
fn euler_is_first_order() {
    let y = final_state(ExplicitEuler, 1000);
    assert!((y - std::f64::consts::E).abs() < 2e-3);
    let coarse = (final_state(ExplicitEuler, 100) - std::f64::consts::E).abs();
    let fine = (final_state(ExplicitEuler, 200) - std::f64::consts::E).abs();
    let ratio = coarse / fine;
    assert!((1.8..2.2).contains(&ratio), "ratio {ratio}");
}

#[test]
fn heun_is_second_order() {
    let coarse = (final_state(Heun, 20) - std::f64::consts::E).abs();
    let fine = (final_state(Heun, 40) - std::f64::consts::E).abs();
    let ratio = coarse / fine;
    assert!((3.5..4.5).contains(&ratio), "ratio {ratio}");
}

#[test]
fn fourth_order_methods_converge_at_rate_sixteen() {
    for method in [Method::Rk4, Method::ThreeEighths] {
        let coarse = (final_state(method, 10) - std::f64::consts::E).abs();
        let fine = (final_state(method, 20) - std::f64::consts::E).abs();
        let ratio = coarse / fine;
        assert!((13.0..19.0).contains(&ratio), "{method}: ratio {ratio}");
    }
    let y = final_state(ThreeEighths, 10);
    assert!((y - std::f64::consts::E).abs() < 1e-5);
}

#[test]
fn time_dependent_rhs_is_integrated_exactly() {
    // y' = t integrates to t^2 / 2.
    let rk = RungeKutta::new(Erk4, Vector::from([0.0]), 0.0, 2.0, 4).unwrap();
    let states: Vec<_> = rk
        .run(|t, _y: &Vector, _: &()| Ok(Vector::from([t])))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    for step in &states {
        assert!((step.state[0] - step.time * step.time / 2.0).abs() < 1e-12);
    }
}

#[test]
fn backwards_integration_is_supported() {
    let rk = RungeKutta::new(Erk4, Vector::from([std::f64::consts::E]), 1.0, 0.0, 20).unwrap();
    assert!(rk.step_size() < 0.0);
    let last = rk.run(growth).unwrap().last().unwrap().unwrap();
    assert!((last.state[0] - 1.0).abs() < 1e-6);
    assert!(last.time.abs() < 1e-12);
}
