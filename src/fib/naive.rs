/// Naive recursive Fibonacci.
///
/// This is the textbook double recursion with no memoization, so it runs
/// in ~O(φⁿ) time. That cost is the point: the function exists to
/// exercise raw call and recursion overhead, so do not replace it with
/// the iterative or fast-doubling versions.
///
/// Exact for `n <= 93`; larger indices overflow `u64` and are outside
/// the benchmark range.
pub fn fib_naive(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib_naive(n - 1) + fib_naive(n - 2)
}
