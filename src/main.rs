//! Benchmark runner for the naive reference kernels.

use naivemark::matrix::naive_ijk::matmul_naive_ijk;
use naivemark::matrix::naive_ikj::matmul_naive_ikj;
use naivemark::threaded::naive_mt::matmul_naive_ijk_mt;
use naivemark::{Error, fibonacci};
use std::time::Instant;

fn main() -> Result<(), Error> {
    run_fibonacci()?;
    run_matmul();
    Ok(())
}

/// Fibonacci section. The first two lines reproduce the original driver's
/// output contract: the integer result, then elapsed wall-clock
/// milliseconds as a float on its own line.
fn run_fibonacci() -> Result<(), Error> {
    println!("=== Fibonacci Benchmark ===\n");

    let start = Instant::now();
    let result = fibonacci(35)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("{}", result);
    println!("{}", elapsed_ms);

    println!("\n{:>4} {:>16} {:>12}", "n", "fib(n)", "time (ms)");
    println!("{}", "-".repeat(36));
    for n in [20, 25, 30, 35] {
        let start = Instant::now();
        let value = fibonacci(n)?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        println!("{:>4} {:>16} {:>12.3}", n, value, ms);
    }
    println!();
    Ok(())
}

fn run_matmul() {
    println!("=== Matrix Multiplication Benchmark ===\n");

    let sizes = [128, 256, 512];
    let iterations = 3;
    let mut all_results = Vec::new();

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let (m, n, k) = (size, size, size);
        let a: Vec<f64> = (0..m * k).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 100) as f64).collect();

        let results: Vec<(&str, (f64, f64))> = vec![
            (
                "Naive (i-j-l)",
                bench_fn(&a, &b, m, n, k, iterations, matmul_naive_ijk),
            ),
            (
                "Scalar (i-k-j)",
                bench_fn(&a, &b, m, n, k, iterations, matmul_naive_ikj),
            ),
            (
                "Naive MT",
                bench_fn(&a, &b, m, n, k, iterations, |a, b, c, m, n, k| {
                    matmul_naive_ijk_mt(a, b, c, m, n, k, 4)
                }),
            ),
        ];

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
}

/// Benchmark one matmul kernel: a warmup pass, then `iterations` timed
/// runs, each into a fresh zeroed C. Returns (avg ms, GFLOPS).
fn bench_fn<F>(
    a: &[f64],
    b: &[f64],
    m: usize,
    n: usize,
    k: usize,
    iterations: usize,
    f: F,
) -> (f64, f64)
where
    F: Fn(&[f64], &[f64], &mut [f64], usize, usize, usize),
{
    // Warmup
    let mut c = vec![0.0; m * n];
    f(a, b, &mut c, m, n, k);

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let mut c = vec![0.0; m * n];
        let start = Instant::now();
        f(a, b, &mut c, m, n, k);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (m * n * k) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));

    println!(
        "\n{:<18} {:>14} {:>14} {:>14} {:>12}",
        "Method", "128×128", "256×256", "512×512", "Speedup"
    );
    println!("{}", "-".repeat(80));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;

        let mut gflops_list = Vec::new();
        let mut speedups = Vec::new();

        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            gflops_list.push(gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;

        println!(
            "{:<18} {:>10.2} GF  {:>10.2} GF  {:>10.2} GF  {:>10.1}×",
            method_name, gflops_list[0], gflops_list[1], gflops_list[2], avg_speedup
        );
    }

    println!("{}", "=".repeat(80));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to Naive (i-j-l). Higher is better.\n");
}
