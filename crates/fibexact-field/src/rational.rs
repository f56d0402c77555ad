//! The exact rational scalar type and small constructors.
//!
//! The field crates work over `num_rational::BigRational`: an
//! arbitrary-precision fraction kept in lowest terms with a positive
//! denominator, so structural equality is value equality.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/// Exact rational scalar used throughout the crate.
pub type Rational = BigRational;

/// Build the rational `numer / denom`.
///
/// # Panics
/// Panics if `denom` is zero (same contract as `BigRational::new`).
#[must_use]
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Embed an integer as a rational with denominator 1.
#[must_use]
pub fn from_integer(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Whether `r` is integer-valued, i.e. its reduced denominator is 1.
#[must_use]
pub fn is_integer(r: &Rational) -> bool {
    r.denom().is_one()
}
