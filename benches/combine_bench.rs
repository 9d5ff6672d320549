use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uncertain_dist::prelude::*;

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("Combine");
    let sizes = [101, 501, 1001, 2001];

    for &size in &sizes {
        let a = normal(1.0, 0.01, 5.0, size).unwrap();
        let b = uniform(9.9, 10.1, size).unwrap();

        for op in [BinaryOp::Add, BinaryOp::Multiply, BinaryOp::Divide] {
            let combiner = Combiner::new();
            group.bench_with_input(
                BenchmarkId::new(format!("sequential_{op:?}"), size),
                &(&a, &b),
                |bench, (a, b)| bench.iter(|| combiner.combine(black_box(a), black_box(b), op)),
            );
        }

        let linear = Combiner::new()
            .with_config(CombineConfig::default().with_rebinning(Rebinning::Linear));
        group.bench_with_input(
            BenchmarkId::new("sequential_linear_Add", size),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| linear.combine(black_box(a), black_box(b), BinaryOp::Add)),
        );

        #[cfg(feature = "parallel")]
        {
            let combiner = Combiner::with_engine(ParallelEngine::new());
            group.bench_with_input(
                BenchmarkId::new("parallel_Add", size),
                &(&a, &b),
                |bench, (a, b)| {
                    bench.iter(|| combiner.combine(black_box(a), black_box(b), BinaryOp::Add))
                },
            );
        }
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("Queries");
    let dist = triangular(10.0, 11.0, 13.0, 10_001).unwrap();
    let ps = [0.025, 0.5, 0.975];

    group.bench_function("quantiles_step", |b| {
        b.iter(|| quantiles(black_box(&dist), black_box(&ps)))
    });
    group.bench_function("moments", |b| b.iter(|| moments(black_box(&dist))));
    group.bench_function("coverage_interval", |b| {
        b.iter(|| coverage_interval(black_box(&dist), 0.95))
    });

    group.finish();
}

criterion_group!(benches, bench_combine, bench_queries);
criterion_main!(benches);
