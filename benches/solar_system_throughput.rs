use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solar_phys::{flatten, n_body, solar_system};
use solar_sim::run;

fn derivative_benchmark(c: &mut Criterion) {
    let preset = solar_system().expect("solar system preset");
    let (state, masses) = flatten(&preset.system).into_parts();
    c.bench_function("n_body/solar_system", |b| {
        b.iter(|| n_body(0.0, black_box(&state), black_box(&masses)).expect("derivative"))
    });
}

fn run_benchmark(c: &mut Criterion) {
    let preset = solar_system().expect("solar system preset");
    let mut group = c.benchmark_group("simulate");
    group.sample_size(10);
    group.bench_function("solar_system/720_steps", |b| {
        b.iter(|| {
            let simulator = run(preset.system.clone(), 7200.0, 10.0, |_| {}, || {}).expect("run");
            black_box(simulator.energy().expect("energy").len())
        })
    });
    group.finish();
}

criterion_group!(benches, derivative_benchmark, run_benchmark);
criterion_main!(benches);
