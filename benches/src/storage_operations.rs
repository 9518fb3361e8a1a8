mod common;

use std::sync::Arc;
use std::thread;

use common::generate_numbers;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dataproc::prelude::*;

/// Benchmark put across many distinct keys (cold table)
fn bench_put_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_cold");
    let items = generate_numbers(16);

    for num_keys in [100, 1_000, 10_000] {
        let keys: Vec<String> = (0..num_keys).map(|i| format!("key-{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(num_keys), &keys, |b, keys| {
            b.iter_batched(
                ConcurrentDataStore::<u64>::new,
                |store| {
                    for key in keys {
                        store.put(key, items.clone());
                    }
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark get on a warm table; reads share the stored slice
fn bench_get_hot(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hot");

    for len in [10, 10_000] {
        let store = ConcurrentDataStore::new();
        store.put("k", generate_numbers(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(store.get("k")));
        });
    }

    group.finish();
}

/// Benchmark full snapshots as the number of keys grows
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for num_keys in [10, 100, 1_000] {
        let store = ConcurrentDataStore::new();
        for i in 0..num_keys {
            store.put(&format!("key-{i}"), generate_numbers(64));
        }
        group.bench_with_input(BenchmarkId::from_parameter(num_keys), &num_keys, |b, _| {
            b.iter(|| black_box(store.snapshot()));
        });
    }

    group.finish();
}

/// Benchmark concurrent updates, contended on one key or spread across keys
fn bench_concurrent_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_updates");
    let threads = 4;
    let updates_per_thread = 250;

    for distinct in [false, true] {
        let label = if distinct { "distinct_keys" } else { "same_key" };
        group.bench_function(label, |b| {
            b.iter_batched(
                || {
                    let store = Arc::new(ConcurrentDataStore::<u64>::new());
                    for t in 0..threads {
                        store.put(&format!("key-{t}"), generate_numbers(32));
                    }
                    store
                },
                |store| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let store = Arc::clone(&store);
                            let key = if distinct { format!("key-{t}") } else { "key-0".to_string() };
                            thread::spawn(move || {
                                for _ in 0..updates_per_thread {
                                    store
                                        .try_update(&key, |current| {
                                            Ok::<_, StorageError>(current.iter().map(|x| x + 1).collect())
                                        })
                                        .unwrap();
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_put_cold,
    bench_get_hot,
    bench_snapshot,
    bench_concurrent_updates
);
criterion_main!(benches);
