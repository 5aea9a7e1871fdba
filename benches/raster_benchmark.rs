#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the rasterization algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000, 10_000] {
        let start = GridPoint::new(0, 0);
        let end = GridPoint::new(length, length * 3 / 7);

        group.bench_with_input(BenchmarkId::new("step", length), &length, |b, _| {
            b.iter(|| rasterize_step_sampling(black_box(start), black_box(end)));
        });
        group.bench_with_input(BenchmarkId::new("dda", length), &length, |b, _| {
            b.iter(|| rasterize_dda(black_box(start), black_box(end)));
        });
        group.bench_with_input(BenchmarkId::new("bresenham", length), &length, |b, _| {
            b.iter(|| rasterize_bresenham_line(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| {
                rasterize_bresenham_circle(black_box(GridPoint::ORIGIN), black_box(radius))
                    .expect("radius is non-negative")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, circle_benchmark);
criterion_main!(benches);
