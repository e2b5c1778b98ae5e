use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sciplot_core::{bin_samples, Data, Series};

fn gen_samples(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // skewed waveform so distinct-value and gap scans do real work
        v.push((i as f64 * 0.013).sin() * 500.0 + (i % 97) as f64);
    }
    v
}

fn bench_binning(c: &mut Criterion) {
    let mut group = c.benchmark_group("binning");
    for &n in &[10_000usize, 100_000usize] {
        let samples = gen_samples(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("auto_n{n}")), &samples, |b, s| {
            b.iter(|| {
                let _ = black_box(bin_samples(s, None, 40));
            });
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("fixed_n{n}")), &samples, |b, s| {
            b.iter(|| {
                let _ = black_box(bin_samples(s, Some(1.0), 40));
            });
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &n in &[10_000usize, 100_000usize] {
        let data = Data::from(gen_samples(n));
        group.bench_with_input(BenchmarkId::from_parameter(format!("scalars_n{n}")), &data, |b, d| {
            b.iter(|| {
                let _ = black_box(Series::normalize(d));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_binning, bench_normalize);
criterion_main!(benches);
