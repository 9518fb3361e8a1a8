mod common;

use common::{busy_work, generate_lines, loaded_processor};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dataproc::prelude::*;
use tempfile::TempDir;

/// Benchmark a CPU-bound map across worker counts
fn bench_transform_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_workers");
    let len = 100_000;
    group.throughput(Throughput::Elements(len as u64));

    for workers in [1, 2, 4, 8] {
        let processor = loaded_processor(workers, "k", len);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| {
                // Identity-shaped so repeated runs see the same input
                processor
                    .transform_data("k", |x| {
                        black_box(busy_work(x));
                        Ok::<_, std::convert::Infallible>(*x)
                    })
                    .unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark transform cost as the sequence grows
fn bench_transform_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_sizes");

    for len in [1_000, 10_000, 100_000] {
        let processor = loaded_processor(4, "k", len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| processor.map_data("k", |x| x ^ 1).unwrap());
        });
    }

    group.finish();
}

/// Benchmark a failing transform, which must leave data untouched
fn bench_transform_failure(c: &mut Criterion) {
    let processor = loaded_processor(4, "k", 100_000);

    c.bench_function("transform_fail_midway", |b| {
        b.iter(|| {
            let result = processor.transform_data("k", |x| {
                if *x == 5_000 { Err("boom") } else { Ok(busy_work(x)) }
            });
            black_box(result.is_err())
        });
    });
}

/// Benchmark the atomic save path against direct writes
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("save");
    let dir = TempDir::new().unwrap();
    let lines = generate_lines(50_000);

    for mode in [SaveMode::Atomic, SaveMode::Direct] {
        let processor = Processor::<String>::with_config(
            ProcessorConfig::new(2).with_save_mode(mode),
        )
        .unwrap();
        processor.load_data("k", lines.clone());
        let path = dir.path().join(format!("{mode:?}.txt"));

        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| black_box(processor.save_data("k", &path).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transform_workers,
    bench_transform_sizes,
    bench_transform_failure,
    bench_save
);
criterion_main!(benches);
