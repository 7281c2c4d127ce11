//! The matrix type and the naive multiplication kernels.
//!
//! Matrices are dense, row-major, and rectangular by construction. The
//! kernels operate on flat slices with explicit dimensions, the layout the
//! benchmark driver times directly.

use std::ops::{AddAssign, Index, Mul};

use crate::error::Error;

pub mod naive_ijk;
pub mod naive_ikj;

/// Element types the kernels accept: plain numeric types whose `Default`
/// is the additive identity. Accumulation uses the type's own arithmetic,
/// so integer elements overflow per the build profile and float elements
/// round per IEEE 754, exactly as the naive reference does.
pub trait Element: Copy + Default + AddAssign + Mul<Output = Self> {}

impl<T: Copy + Default + AddAssign + Mul<Output = T>> Element for T {}

/// A dense row-major matrix.
///
/// Every row has the same length and both dimensions are non-zero; both
/// invariants are enforced at construction, so the kernels never re-check
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the input is empty, any
    /// row is empty, or the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let row_count = rows.len();
        if row_count == 0 {
            return Err(Error::mismatch("matrix has no rows"));
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(Error::mismatch("matrix has zero-length rows"));
        }
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::mismatch(format!(
                    "ragged matrix: row 0 has {} columns, row {} has {}",
                    cols,
                    i,
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Matrix {
            data,
            rows: row_count,
            cols,
        })
    }

    /// A `rows × cols` matrix of additive identities.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The backing storage in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Element + From<u8>> Matrix<T> {
    /// The `k × k` identity matrix.
    pub fn identity(k: usize) -> Self {
        let mut ident = Matrix::zeros(k, k);
        for i in 0..k {
            ident.data[i * k + i] = T::from(1u8);
        }
        ident
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}
