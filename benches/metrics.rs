//! Benchmarks for metric calculation and description rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use metrica::{DescriptionGenerator, MetricKind, MetricResult};

fn generate_test_data(count: usize) -> (Vec<f64>, Vec<f64>) {
    let y_true = (0..count).map(|i| (i % 2) as f64).collect();
    let y_pred = (0..count)
        .map(|i| 0.1 + (i as f64 % 10.0) * 0.08)
        .collect();
    (y_true, y_pred)
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    let (y_true, y_pred) = generate_test_data(10_000);
    group.throughput(Throughput::Elements(y_true.len() as u64));

    for kind in MetricKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let result = kind.calculate(black_box(&y_true), black_box(&y_pred));
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    let generator = DescriptionGenerator::new();
    let result = MetricResult::new("mean_squared_error", 0.375);
    let unknown = MetricResult::new("custom_metric", 0.375);

    group.bench_function("template", |b| {
        b.iter(|| black_box(generator.generate(black_box(&result))))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| black_box(generator.generate(black_box(&unknown))))
    });

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_describe);
criterion_main!(benches);
