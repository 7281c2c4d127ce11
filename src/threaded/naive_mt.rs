//! Multi-threaded naive i-j-l multiplication.

use std::thread;

use crate::matrix::Element;
use crate::matrix::naive_ijk::matmul_naive_ijk;

/// Row-parallel version of the naive i-j-l kernel.
///
/// Each thread owns a contiguous band of C's rows and runs the serial
/// kernel on it with the matching band of A. Per-cell accumulation order
/// is untouched, so the result is bit-identical to the serial kernel,
/// floats included.
///
/// Thread count adapts based on matrix size:
/// - < 100M FLOPs: 1 thread
/// - < 300M FLOPs: 2 threads
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn matmul_naive_ijk_mt<T: Element + Send + Sync>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
    num_threads: usize,
) {
    let effective_threads = choose_thread_count(m, n, k, num_threads);

    if effective_threads == 1 {
        matmul_naive_ijk(a, b, c, m, n, k);
        return;
    }

    let rows_per_thread = m.div_ceil(effective_threads);

    thread::scope(|scope| {
        for (band, c_band) in c.chunks_mut(rows_per_thread * n).enumerate() {
            let start_row = band * rows_per_thread;
            let band_rows = c_band.len() / n;
            let a_band = &a[start_row * k..(start_row + band_rows) * k];

            scope.spawn(move || {
                matmul_naive_ijk(a_band, b, c_band, band_rows, n, k);
            });
        }
    });
}

fn choose_thread_count(m: usize, n: usize, k: usize, max_threads: usize) -> usize {
    let flops = 2.0 * (m * n * k) as f64;

    const SINGLE_THREAD_THRESHOLD: f64 = 100_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 300_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (m / 64).max(1);

    optimal_threads.min(threads_by_rows).max(1)
}

#[cfg(test)]
mod tests {
    use super::choose_thread_count;

    #[test]
    fn small_matrices_stay_single_threaded() {
        assert_eq!(choose_thread_count(64, 64, 64, 8), 1);
        assert_eq!(choose_thread_count(2, 2, 3, 8), 1);
    }

    #[test]
    fn large_matrices_fan_out() {
        assert!(choose_thread_count(1024, 1024, 1024, 8) > 1);
    }

    #[test]
    fn row_count_caps_threads() {
        // 4096 deep but only 8 rows: not worth more than one band.
        assert_eq!(choose_thread_count(8, 4096, 4096, 8), 1);
    }
}
