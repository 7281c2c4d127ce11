use crate::matrix::Element;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// Swapping the j and l loops makes the innermost loop walk both B and C
/// sequentially (stride 1), which is usually several times faster than
/// the i-j-l order on large matrices despite doing identical arithmetic.
///
/// The driver benchmarks this against [`matmul_naive_ijk`] to show what
/// loop order alone is worth; the public [`multiply`] contract stays on
/// the i-j-l kernel.
///
/// For float elements the per-cell summation order differs from i-j-l
/// only in interleaving across cells, not within one cell, so results
/// match the i-j-l kernel exactly.
///
/// [`matmul_naive_ijk`]: crate::matrix::naive_ijk::matmul_naive_ijk
/// [`multiply`]: crate::multiply
pub fn matmul_naive_ikj<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        for l in 0..k {
            for j in 0..n {
                c[i * n + j] += a[i * k + l] * b[l * n + j];
            }
        }
    }
}
