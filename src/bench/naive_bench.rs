//! Criterion benchmarks for the naive kernels.

use criterion::{Criterion, criterion_group, criterion_main};
use naivemark::fib_naive;
use naivemark::matrix::naive_ijk::matmul_naive_ijk;
use naivemark::matrix::naive_ikj::matmul_naive_ikj;
use std::hint::black_box;

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for n in [15u64, 20, 25] {
        group.bench_function(format!("fib_naive/{}", n), |bench| {
            bench.iter(|| fib_naive(black_box(n)))
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for size in [64usize, 128] {
        let (m, n, k) = (size, size, size);
        let a: Vec<f64> = (0..m * k).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 100) as f64).collect();

        group.bench_function(format!("ijl/{}", size), |bench| {
            bench.iter(|| {
                let mut out = vec![0.0; m * n];
                matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, m, n, k);
                out
            })
        });
        group.bench_function(format!("ikj/{}", size), |bench| {
            bench.iter(|| {
                let mut out = vec![0.0; m * n];
                matmul_naive_ikj(black_box(&a), black_box(&b), &mut out, m, n, k);
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_matmul);
criterion_main!(benches);
