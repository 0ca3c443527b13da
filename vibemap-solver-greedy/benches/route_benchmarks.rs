//! Criterion benchmarks for the nearest-neighbour planner.
//!
//! Measures planning time across selection sizes to track the quadratic
//! cost of the distance matrix and greedy walk.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package vibemap-solver-greedy
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vibemap_core::{RoutePlanner, RouteRequest};
use vibemap_solver_greedy::{DistanceMatrix, NearestNeighbourPlanner};


use bench_support::{BENCHMARK_SEED, generate_clustered_places};

/// Selection sizes to benchmark.
const SELECTION_SIZES: &[usize] = &[10, 50, 200];

fn bench_plan_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_time");
    group.measurement_time(Duration::from_secs(5));

    for &size in SELECTION_SIZES {
        let request = RouteRequest::new(generate_clustered_places(size, BENCHMARK_SEED));

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small selection sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("places", size), &request, |b, req| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking planning performance, result is intentionally discarded"
                )]
                let _ = NearestNeighbourPlanner.plan(req);
            });
        });
    }

    group.finish();
}

fn bench_matrix_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");
    for &size in SELECTION_SIZES {
        let places = generate_clustered_places(size, BENCHMARK_SEED);
        group.bench_with_input(BenchmarkId::new("places", size), &places, |b, input| {
            b.iter(|| DistanceMatrix::from_places(input));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan_times, bench_matrix_build);
criterion_main!(benches);
