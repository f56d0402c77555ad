//! Exponentiation in a quadratic extension field.
//!
//! `power` computes `x^n` by binary exponentiation (square-and-multiply),
//! iterating over the bits of `n` from MSB to LSB, so it needs O(log n)
//! field multiplications. `power_linear` is the O(n) reference the fast
//! version is validated against.

use fibexact_field::{QuadExt, QuadraticField};

/// Compute `x^n` by square-and-multiply.
///
/// `power(x, 0)` is the multiplicative identity for every `x`, including
/// zero (the empty product). The loop counter walks the bit positions of
/// `n` downward, so termination is immediate.
///
/// # Example
/// ```
/// use fibexact_field::{from_integer, QuadraticField};
/// use fibexact_core::power::power;
///
/// let field = QuadraticField::new(from_integer(5)).unwrap();
/// let two = field.from_integer(2);
/// assert_eq!(power(&field, &two, 10), field.from_integer(1024));
/// ```
#[must_use]
pub fn power(field: &QuadraticField, x: &QuadExt, n: u64) -> QuadExt {
    let num_bits = 64 - n.leading_zeros();
    let mut result = field.one();
    for i in (0..num_bits).rev() {
        // Square, then multiply by the base if the bit is set
        result = field.mul(&result, &result);
        if (n >> i) & 1 == 1 {
            result = field.mul(&result, x);
        }
    }
    result
}

/// Compute `x^n` by multiplying `x` in `n` times.
///
/// O(n) field multiplications; retained as the reference against which
/// [`power`] is cross-checked in tests and fuzzing.
#[must_use]
pub fn power_linear(field: &QuadraticField, x: &QuadExt, n: u64) -> QuadExt {
    let mut result = field.one();
    for _ in 0..n {
        result = field.mul(&result, x);
    }
    result
}
