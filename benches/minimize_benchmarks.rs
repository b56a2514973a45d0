//! Benchmark suite for Karnaugh minimization
//!
//! Covers the interesting shapes of the search: parity functions (nothing
//! groups, every true entry is its own term), dense pseudo-random tables
//! (deep recursive growth with backtracking), and tables with don't-cares.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use karnaugh_logic::TruthTable;

/// Deterministic pseudo-random index set with roughly the given density
fn random_table(bits: u32, density_percent: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..(1u64 << bits))
        .filter(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 100 < density_percent
        })
        .collect()
}

fn parity_table(bits: u32) -> Vec<u64> {
    (0..(1u64 << bits))
        .filter(|i| i.count_ones() % 2 == 1)
        .collect()
}

fn bench_parity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parity");
    for bits in [3u32, 5, 7] {
        let ones = parity_table(bits);
        group.throughput(Throughput::Elements(ones.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                let table = TruthTable::with_bits(ones.iter().copied(), [], bits);
                black_box(table.minimize())
            })
        });
    }
    group.finish();
}

fn bench_dense_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_random");
    for bits in [4u32, 6] {
        let ones = random_table(bits, 60, 0x5DEECE66D);
        group.throughput(Throughput::Elements(ones.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                let table = TruthTable::with_bits(ones.iter().copied(), [], bits);
                black_box(table.minimize())
            })
        });
    }
    group.finish();
}

fn bench_with_dont_cares(c: &mut Criterion) {
    let mut group = c.benchmark_group("dont_cares");
    for bits in [4u32, 6] {
        let ones = random_table(bits, 30, 0xB5297A4D);
        let dcs: Vec<u64> = random_table(bits, 30, 0x68E31DA4)
            .into_iter()
            .filter(|i| !ones.contains(i))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                let table =
                    TruthTable::with_bits(ones.iter().copied(), dcs.iter().copied(), bits);
                black_box(table.minimize())
            })
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let ones = random_table(6, 50, 0x9E3779B9);
    let table = TruthTable::with_bits(ones, [], 6);
    c.bench_function("validate_6_bits", |b| {
        b.iter(|| black_box(table.minimize_validated().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_parity,
    bench_dense_random,
    bench_with_dont_cares,
    bench_validation
);
criterion_main!(benches);
