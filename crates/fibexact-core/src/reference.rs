//! Naive recursive Fibonacci, kept as a correctness oracle.

use num_bigint::BigUint;

/// Compute F(n) by the textbook recursion.
///
/// Exponential time; exists only so the closed-form path has an
/// independent implementation to be cross-checked against for small `n`.
/// Never use this on a hot path.
#[must_use]
pub fn fibonacci_rec(n: u64) -> BigUint {
    match n {
        0 => BigUint::ZERO,
        1 => BigUint::from(1u32),
        _ => fibonacci_rec(n - 1) + fibonacci_rec(n - 2),
    }
}
