//! Criterion benchmarks for the bit generators.
//!
//! Measures raw word throughput of each generator for a range of batch
//! sizes, plus the cost of the xorshift64 warm-up during construction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prng_core::{
    BitGenerator, Mt19937, RandCoreGenerator, SeedableBitGenerator, XorShift32, XorShift64,
};

/// Sum `n` words so the optimiser cannot drop the draws.
fn drain<G: BitGenerator>(generator: &mut G, n: usize) -> G::Word {
    let mut total = G::MIN;
    for _ in 0..n {
        total = total ^ generator.next_word();
    }
    total
}

fn bench_next_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_word");

    for size in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut xs32 = XorShift32::new(42);
        group.bench_with_input(BenchmarkId::new("xorshift32", size), &size, |b, &n| {
            b.iter(|| drain(&mut xs32, black_box(n)));
        });

        let mut xs64 = XorShift64::new(42);
        group.bench_with_input(BenchmarkId::new("xorshift64", size), &size, |b, &n| {
            b.iter(|| drain(&mut xs64, black_box(n)));
        });

        let mut mt = Mt19937::new(42);
        group.bench_with_input(BenchmarkId::new("mt19937", size), &size, |b, &n| {
            b.iter(|| drain(&mut mt, black_box(n)));
        });

        let mut std_rng: RandCoreGenerator = RandCoreGenerator::from_seed(42);
        group.bench_with_input(BenchmarkId::new("std_rng", size), &size, |b, &n| {
            b.iter(|| drain(&mut std_rng, black_box(n)));
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    // 255 is the longest warm-up.
    for seed in [0u64, 16, 255] {
        group.bench_with_input(BenchmarkId::new("xorshift64", seed), &seed, |b, &s| {
            b.iter(|| XorShift64::new(black_box(s)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_next_word, bench_construction);
criterion_main!(benches);
