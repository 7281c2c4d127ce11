//! Error types for the benchmark kernels.
//!
//! Both kernels fail fast: a violated precondition returns immediately,
//! with no partial results and no clamping of inputs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fibonacci called with a negative index.
    #[error("invalid argument: Fibonacci index must be non-negative, got {n}")]
    InvalidArgument { n: i64 },

    /// Matrix shapes are unusable: ragged rows, a zero dimension, or
    /// incompatible inner dimensions for multiplication.
    #[error("dimension mismatch: {reason}")]
    DimensionMismatch { reason: String },
}

impl Error {
    pub(crate) fn mismatch(reason: impl Into<String>) -> Self {
        Error::DimensionMismatch {
            reason: reason.into(),
        }
    }
}
