//! Benchmarks for feature detection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bathy_algorithms::features::{detect_channels, find_islands, ChannelParams, LocateParams};
use bathy_algorithms::geometry::{geometric_median, Point, DEFAULT_EPS};
use bathy_algorithms::segmentation::{classify_mask, extract_components};
use bathy_core::raster::{Connectivity, Raster};

/// Create an archipelago: a sea floor with a lattice of rounded seamounts
/// breaking the surface, plus some deterministic roughness
fn create_archipelago(size: usize) -> Raster<f32> {
    let mut grid = Raster::new(size, size);
    let spacing = 24.0;
    for row in 0..size {
        for col in 0..size {
            let dr = (row as f64 % spacing) - spacing / 2.0;
            let dc = (col as f64 % spacing) - spacing / 2.0;
            let dist = (dr * dr + dc * dc).sqrt();
            let noise = ((row * 7 + col * 13) % 17) as f64 * 0.1;
            grid.set(row, col, (8.0 - dist + noise) as f32).unwrap();
        }
    }
    grid
}

fn bench_extract_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation/extract_components");
    for size in [256, 512, 1024] {
        let mask = classify_mask(&create_archipelago(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| extract_components(black_box(&mask), Connectivity::Eight))
        });
    }
    group.finish();
}

fn bench_geometric_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/geometric_median");
    for n in [100, 1_000, 10_000] {
        let points: Vec<Point> = (0..n)
            .map(|i| Point::new(((i * 37) % 101) as f64, ((i * 53) % 89) as f64))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| geometric_median(black_box(&points), DEFAULT_EPS).unwrap())
        });
    }
    group.finish();
}

fn bench_find_islands(c: &mut Criterion) {
    let mut group = c.benchmark_group("features/find_islands");
    for size in [256, 512, 1024] {
        let grid = create_archipelago(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| find_islands(black_box(&grid), &LocateParams::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_detect_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("features/detect_channels");
    for size in [256, 512, 1024] {
        let grid = create_archipelago(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| detect_channels(black_box(&grid), &ChannelParams::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extract_components,
    bench_geometric_median,
    bench_find_islands,
    bench_detect_channels,
);
criterion_main!(benches);
