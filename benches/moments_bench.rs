use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;
use momenta::*;

const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

fn data(size: usize) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    // Exponential draws: a skewed, heavy-tailed sample
    (0..size).map(|_| -(-rng.r#gen::<f64>()).ln_1p() * 3.0).collect()
}

/// 1. CENTRAL MOMENT (the shared primitive, order 4)
fn bench_central_moment(c: &mut Criterion) {
    let mut group = c.benchmark_group("moment/central");

    for &size in &SIZES {
        let sample = data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order4", size), &sample, |b, sample| {
            b.iter(|| black_box(central_moment(black_box(sample), 4)))
        });
    }
    group.finish();
}

/// 2. SKEWNESS (both normalisations)
fn bench_skewness(c: &mut Criterion) {
    let mut group = c.benchmark_group("moment/skewness");

    for &size in &SIZES {
        let sample = data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sample", size), &sample, |b, sample| {
            b.iter(|| black_box(skewness_sample(black_box(sample))))
        });
        group.bench_with_input(BenchmarkId::new("population", size), &sample, |b, sample| {
            b.iter(|| black_box(skewness_population(black_box(sample))))
        });
    }
    group.finish();
}

/// 3. KURTOSIS and the full summary
fn bench_kurtosis_and_summary(c: &mut Criterion) {
    let sample = data(10_000);

    c.bench_function("moment/kurtosis_population", |b| {
        b.iter(|| black_box(kurtosis_population(black_box(&sample))))
    });
    c.bench_function("moment/summary", |b| {
        b.iter(|| black_box(MomentSummary::from_data(black_box(&sample))))
    });
}

criterion_group!(
    benches,
    bench_central_moment,
    bench_skewness,
    bench_kurtosis_and_summary
);
criterion_main!(benches);
