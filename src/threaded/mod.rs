//! Multi-threaded wrapper for the naive kernel.
//!
//! Splits the output rows across threads, each running the unmodified
//! i-j-l kernel on its band. Thread count adapts to matrix size - small
//! matrices use fewer threads to avoid overhead.

pub mod naive_mt;
