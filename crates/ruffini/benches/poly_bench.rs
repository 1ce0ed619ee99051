//! Benchmarks for the core polynomial operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ruffini::prelude::*;

type F = ruffini::rings::finite_field::GF998244353;

/// Generates a deterministic polynomial with small rational coefficients.
fn sample_poly_q(degree: usize) -> Polynomial<Q> {
    (0..=degree)
        .map(|i| Q::from_integer((i as i64 * 37 % 100) - 50 + 1))
        .collect()
}

/// Generates a deterministic polynomial over a word-sized prime field.
fn sample_poly_f(degree: usize) -> Polynomial<F> {
    (0..=degree)
        .map(|i| F::new((i as u64).wrapping_mul(2_654_435_761) + 1))
        .collect()
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = sample_poly_q(size);
        let q = sample_poly_q(size);
        group.bench_with_input(BenchmarkId::new("Q", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q));
        });

        let p = sample_poly_f(size);
        let q = sample_poly_f(size);
        group.bench_with_input(BenchmarkId::new("GF(p)", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q));
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div_rem");

    for size in [16, 64, 256] {
        let a = sample_poly_f(2 * size);
        let d = sample_poly_f(size);
        group.bench_with_input(BenchmarkId::new("GF(p)", size), &size, |b, _| {
            b.iter(|| black_box(a.div_rem(&d)));
        });
    }

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("monic_gcd");
    group.sample_size(50);

    for size in [8, 32, 128] {
        let common = sample_poly_f(size / 2);
        let a = &common * &sample_poly_f(size);
        let b = &common * &sample_poly_f(size + 1);
        group.bench_with_input(BenchmarkId::new("GF(p)", size), &size, |bench, _| {
            bench.iter(|| black_box(monic_gcd_reduce(&a, &b)));
        });
    }

    group.finish();
}

fn bench_eval_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("horner");

    let p = sample_poly_q(256);
    let x = Q::new(3, 7);
    group.bench_function("eval_degree_256", |b| b.iter(|| black_box(p.eval(&x))));

    let outer = sample_poly_f(16);
    let inner = sample_poly_f(8);
    group.bench_function("compose_16_8", |b| {
        b.iter(|| black_box(outer.compose(&inner)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_division,
    bench_gcd,
    bench_eval_compose
);

criterion_main!(benches);
