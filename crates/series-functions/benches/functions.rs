//! Performance benchmarks for series-functions.
//!
//! Run with: `cargo bench -p series-functions`
//!
//! These benchmarks measure throughput across input sizes to validate O(n)
//! complexity of the single-pass functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use series_functions::prelude::*;

/// Generate a deterministic, noisy gauge series.
fn generate_series(size: usize) -> TimeSeries {
    let mut timestamps = Vec::with_capacity(size);
    let mut values = Vec::with_capacity(size);
    let mut level = 100.0;
    for i in 0..size {
        let x = i as f64;
        level += (x * 0.1).sin() * 2.0 + (x * 0.03).cos() * 1.5;
        timestamps.push(1_700_000_000_000 + i as i64 * 1_000);
        values.push(level);
    }
    TimeSeries::builder("bench.gauge")
        .points(timestamps, values)
        .build()
        .expect("benchmark series must be valid")
}

/// Generate a piecewise-linear series that vectorizes down heavily.
fn generate_segments(size: usize) -> TimeSeries {
    let timestamps: Vec<i64> = (0..size as i64).collect();
    let values: Vec<f64> = (0..size).map(|i| ((i / 50) % 2) as f64 * 10.0).collect();
    TimeSeries::builder("bench.segments")
        .points(timestamps, values)
        .build()
        .expect("benchmark series must be valid")
}

// Standard sizes for benchmarking
const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("min");
    for &size in SIZES {
        let series = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| Min::new().execute(&[black_box(series)]))
        });
    }
    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");
    for &size in SIZES {
        let series = generate_series(size);
        let function = Percentile::new().percentile(0.99);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| function.execute(&[black_box(series)]))
        });
    }
    group.finish();
}

fn bench_vectorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorization");
    for &size in SIZES {
        let noisy = generate_series(size);
        let segments = generate_segments(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("noisy", size), &noisy, |b, series| {
            b.iter(|| Vectorization::new().transform(black_box(series)))
        });
        group.bench_with_input(BenchmarkId::new("segments", size), &segments, |b, series| {
            b.iter(|| Vectorization::new().transform(black_box(series)))
        });
    }
    group.finish();
}

fn bench_dtw(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtw");
    for &size in &SIZES[..3] {
        let a = generate_series(size);
        let b = generate_series(size + size / 10);
        let function = Dtw::new("metric:bench.gauge");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &(a, b), |bench, (a, b)| {
            bench.iter(|| function.execute(&[black_box(a), black_box(b)]))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_vectorization");
    for &count in &[10_usize, 100, 1_000] {
        let batch: Vec<TimeSeries> = (0..count).map(|_| generate_series(1_000)).collect();
        let processor = BatchProcessor::new().min_parallel_threshold(64);
        group.throughput(Throughput::Elements((count * 1_000) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &batch, |b, batch| {
            b.iter(|| processor.transform(&Vectorization::new(), black_box(batch)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_min,
    bench_percentile,
    bench_vectorization,
    bench_dtw,
    bench_batch,
);

criterion_main!(benches);
