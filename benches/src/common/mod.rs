#![allow(dead_code)]

use dataproc::prelude::*;

/// Deterministic integer payload of `len` items
pub fn generate_numbers(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i.wrapping_mul(2_654_435_761) % 10_000).collect()
}

/// Deterministic text payload of `len` lines
pub fn generate_lines(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("record-{i:08} payload {}", i % 97)).collect()
}

/// CPU-bound work per item so parallelism has something to amortize
pub fn busy_work(x: &u64) -> u64 {
    let mut acc = *x;
    for _ in 0..256 {
        acc = acc.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    }
    acc
}

/// Processor with `len` numbers loaded under `key`
pub fn loaded_processor(workers: i64, key: &str, len: usize) -> Processor<u64> {
    let processor = Processor::new(workers).expect("Failed to build processor");
    processor.load_data(key, generate_numbers(len));
    processor
}
