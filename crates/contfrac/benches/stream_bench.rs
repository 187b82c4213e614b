//! Benchmarks for stream arithmetic and constant generation.
//!
//! Includes:
//! - Gosper arithmetic on rationals and quadratic irrationals
//! - Backend comparison (`Integer` vs `Tally`)
//! - π, e and root-isolation prefixes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use contfrac::prelude::*;

fn sqrt(n: i64) -> ContinuedFraction<Integer> {
    let poly = Polynomial::new(vec![Integer::new(-n), Integer::new(0), Integer::new(1)]);
    ContinuedFraction::from_stream(Stream::new(algebraic(poly, &AlgebraicConfig::default())))
}

fn drain<M: Matter + 'static>(cf: ContinuedFraction<M>, n: usize) -> usize {
    cf.take(n).filter(Result::is_ok).count()
}

/// Benchmark rational arithmetic on both integer backends.
fn bench_rational_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational_add");

    for scale in [10i64, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Integer", scale), &scale, |b, &s| {
            b.iter(|| {
                let x = ContinuedFraction::from_ratio(Integer::new(s + 1), Integer::new(s - 3));
                let y = ContinuedFraction::from_ratio(Integer::new(2 * s + 7), Integer::new(s));
                black_box(drain(x + y, 256))
            });
        });

        group.bench_with_input(BenchmarkId::new("Tally", scale), &scale, |b, &s| {
            b.iter(|| {
                let x = ContinuedFraction::from_ratio(Tally::new(s + 1), Tally::new(s - 3));
                let y = ContinuedFraction::from_ratio(Tally::new(2 * s + 7), Tally::new(s));
                black_box(drain(x + y, 256))
            });
        });
    }

    group.finish();
}

/// Benchmark arithmetic on infinite operands.
fn bench_irrational_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("irrational_mul");

    for terms in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("sqrt2*sqrt3", terms), &terms, |b, &n| {
            b.iter(|| {
                let product = ContinuedFraction::combine_with(
                    sqrt(2),
                    sqrt(3),
                    Operation::Mul.state(),
                    PullOrder::Alternating,
                );
                black_box(drain(product, n))
            });
        });
    }

    group.finish();
}

/// Benchmark the GCF transducer on constants.
fn bench_constants(c: &mut Criterion) {
    let mut group = c.benchmark_group("constants");
    group.sample_size(20);

    group.bench_function("pi_9_terms", |b| b.iter(|| black_box(drain(pi::<Integer>(), 9))));
    group.bench_function("e_64_terms", |b| {
        b.iter(|| black_box(drain(exp(Integer::new(1)), 64)));
    });
    group.bench_function("ln2_32_terms", |b| {
        b.iter(|| black_box(drain(log(Integer::new(1)), 32)));
    });

    group.finish();
}

criterion_group!(benches, bench_rational_ops, bench_irrational_ops, bench_constants);

criterion_main!(benches);
