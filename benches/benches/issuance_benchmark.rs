//! Issuance model benchmarks.
//!
//! Run with: `cargo bench --package minestone-bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minestone_bench::{sample_heights, sample_thresholds};
use minestone_model::IssuanceSchedule;

fn cumulative_benchmark(c: &mut Criterion) {
    let schedule = IssuanceSchedule::BITCOIN;
    let mut group = c.benchmark_group("cumulative_at");

    for height in sample_heights() {
        group.bench_with_input(BenchmarkId::from_parameter(height), &height, |b, &h| {
            b.iter(|| schedule.cumulative_at(black_box(h)));
        });
    }

    group.finish();
}

fn threshold_benchmark(c: &mut Criterion) {
    let schedule = IssuanceSchedule::BITCOIN;
    let mut group = c.benchmark_group("height_for_threshold");

    for threshold in sample_thresholds(&schedule) {
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &threshold,
            |b, &t| {
                b.iter(|| schedule.height_for_threshold(black_box(t)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, cumulative_benchmark, threshold_benchmark);
criterion_main!(benches);
