//! Polarization evaluation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sofc_polarization::{Parameters, PolarizationSolver};

fn bench_solver_construction(c: &mut Criterion) {
    let params = Parameters::default();

    c.bench_function("solver_construction", |b| {
        b.iter(|| PolarizationSolver::from_parameters(black_box(&params)))
    });
}

fn bench_single_point(c: &mut Criterion) {
    let solver = PolarizationSolver::from_parameters(&Parameters::default()).unwrap();

    c.bench_function("evaluate_operating_point", |b| {
        b.iter(|| solver.evaluate(black_box(1.7)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let solver = PolarizationSolver::from_parameters(&Parameters::default()).unwrap();
    let currents: Vec<f64> = (1..=1000).map(|k| k as f64 * 0.005).collect();

    c.bench_function("sweep_1000_points", |b| {
        b.iter(|| solver.sweep(black_box(&currents)))
    });
}

criterion_group!(
    benches,
    bench_solver_construction,
    bench_single_point,
    bench_sweep
);
criterion_main!(benches);
