//! Naive recursive Fibonacci.
//!
//! One implementation, kept deliberately slow: the exponential double
//! recursion is what the benchmark measures.

pub mod naive;
