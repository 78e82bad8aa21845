//! Criterion benchmarks for the four routing strategies.
//!
//! Uses deterministic pseudo-random stop layouts so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evroute::aco::{AcoConfig, AcoRunner};
use u_evroute::distance::{DistanceMatrix, Location};
use u_evroute::ga::{GaConfig, GaRunner};
use u_evroute::pso::{PsoConfig, PsoRunner};
use u_evroute::random::rng_from_seed;
use u_evroute::sa::{SaConfig, SaRunner};

const SIZES: [usize; 3] = [10, 25, 50];

fn stops(n: usize) -> DistanceMatrix {
    let locations: Vec<Location> = (0..n)
        .map(|k| Location::new((k * 73 % 101) as f64, (k * 37 % 89) as f64))
        .collect();
    DistanceMatrix::from_locations(&locations)
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_tour");
    group.sample_size(10);

    let config = SaConfig::default().with_cooling_rate(0.995);
    for &n in &SIZES {
        let dm = stops(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| {
                let mut rng = rng_from_seed(Some(42));
                black_box(SaRunner::run(black_box(dm), &config, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tour");
    group.sample_size(10);

    let config = GaConfig::default().with_generations(50);
    for &n in &SIZES {
        let dm = stops(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| {
                let mut rng = rng_from_seed(Some(42));
                black_box(GaRunner::run(black_box(dm), &config, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_tour");
    group.sample_size(10);

    let config = AcoConfig::default().with_iterations(30);
    for &n in &SIZES {
        let dm = stops(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| {
                let mut rng = rng_from_seed(Some(42));
                black_box(AcoRunner::run(black_box(dm), &config, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_tour");
    group.sample_size(10);

    let config = PsoConfig::default().with_iterations(50);
    for &n in &SIZES {
        let dm = stops(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| {
                let mut rng = rng_from_seed(Some(42));
                black_box(PsoRunner::run(black_box(dm), &config, &mut rng))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sa, bench_ga, bench_aco, bench_pso);
criterion_main!(benches);
