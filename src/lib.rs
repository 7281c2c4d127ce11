//! Reference micro-benchmarks, kept deliberately naive.
//!
//! Two kernels that every language benchmark suite seems to start with:
//! recursive Fibonacci and triple-loop dense matrix multiplication. Both
//! are implemented exactly as the textbook writes them - no memoization,
//! no blocking, no SIMD - because the point is to measure the reference
//! algorithm's cost, not to beat it.
//!
//! ## Usage
//!
//! ```
//! use naivemark::{Matrix, fibonacci, multiply};
//!
//! assert_eq!(fibonacci(10).unwrap(), 55);
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! For large matrices there is a row-parallel variant with the same
//! numeric result:
//!
//! ```
//! use naivemark::{Matrix, multiply_parallel};
//!
//! let a: naivemark::Matrix<f64> = Matrix::identity(64);
//! let b = Matrix::identity(64);
//! let c = multiply_parallel(&a, &b, 4).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! ## What's inside
//!
//! - Unmemoized double-recursive Fibonacci (~O(φⁿ), intentionally)
//! - i-j-l triple-loop matmul (the contractual kernel)
//! - i-k-j loop-order variant, for comparing what loop order alone buys
//! - Row-parallel wrapper over the i-j-l kernel

pub mod error;
pub mod fib;
pub mod matrix;
pub mod threaded;

pub use error::Error;
pub use fib::naive::fib_naive;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::{Element, Matrix};

/// The nth Fibonacci number via naive double recursion.
///
/// `fibonacci(0) == 0`, `fibonacci(1) == 1`, and each later term is the
/// sum of the two before it. Negative indices fail with
/// [`Error::InvalidArgument`] instead of recursing.
///
/// Runs in exponential time on purpose; see [`fib_naive`].
pub fn fibonacci(n: i64) -> Result<u64, Error> {
    if n < 0 {
        return Err(Error::InvalidArgument { n });
    }
    Ok(fib_naive(n as u64))
}

/// Matrix product C = A * B via the naive i-j-l triple loop.
///
/// Returns a freshly allocated matrix of shape `a.rows() × b.cols()`;
/// the inputs are not touched. Fails with [`Error::DimensionMismatch`]
/// when `a.cols() != b.rows()`.
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, Error> {
    let (m, n, k) = product_dims(a, b)?;
    let mut c = Matrix::zeros(m, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k);
    Ok(c)
}

/// Same as [`multiply`] but splits the output rows across threads.
///
/// Per-cell accumulation order is unchanged, so the result is
/// bit-identical to [`multiply`] for every element type. Thread count
/// adapts to matrix size - small matrices run on one thread because the
/// overhead isn't worth it.
pub fn multiply_parallel<T: Element + Send + Sync>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    num_threads: usize,
) -> Result<Matrix<T>, Error> {
    let (m, n, k) = product_dims(a, b)?;
    let mut c = Matrix::zeros(m, n);
    threaded::naive_mt::matmul_naive_ijk_mt(
        a.as_slice(),
        b.as_slice(),
        c.as_mut_slice(),
        m,
        n,
        k,
        num_threads,
    );
    Ok(c)
}

fn product_dims<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(usize, usize, usize), Error> {
    if a.cols() != b.rows() {
        return Err(Error::mismatch(format!(
            "cannot multiply {}x{} by {}x{}: inner dimensions differ",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    Ok((a.rows(), b.cols(), a.cols()))
}
