//! Element representation for a quadratic extension of the rationals.
//!
//! A `QuadExt` is the coefficient pair `(rational, irrational)` meaning
//! `rational + irrational·√d`; the discriminant `d` itself lives in
//! [`crate::field::QuadraticField`], which performs all arithmetic.

use std::fmt;

use num_traits::Zero;

use crate::rational::Rational;

/// An element `rational + irrational·√d` of a quadratic field extension.
///
/// Equality is structural: two elements are equal iff both coefficients
/// are respectively equal. Because `√d` is irrational, no distinct pair
/// denotes the same number, so no normalization pass is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadExt {
    /// Coefficient of 1.
    pub rational: Rational,
    /// Coefficient of √d.
    pub irrational: Rational,
}

impl QuadExt {
    /// Build an element from its two coefficients.
    #[must_use]
    pub fn new(rational: Rational, irrational: Rational) -> Self {
        Self {
            rational,
            irrational,
        }
    }

    /// Whether this is the additive identity `(0, 0)`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rational.is_zero() && self.irrational.is_zero()
    }

    /// Whether the irrational coefficient is zero, i.e. the element lies
    /// in the base field and can be projected back to a plain rational.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.irrational.is_zero()
    }
}

impl fmt::Display for QuadExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}·√d", self.rational, self.irrational)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{from_integer, ratio};

    #[test]
    fn structural_equality() {
        let x = QuadExt::new(ratio(1, 2), ratio(1, 2));
        let y = QuadExt::new(ratio(2, 4), ratio(3, 6));
        assert_eq!(x, y);
        assert_ne!(x, QuadExt::new(ratio(1, 2), from_integer(0)));
    }

    #[test]
    fn zero_and_rational_predicates() {
        let zero = QuadExt::new(from_integer(0), from_integer(0));
        assert!(zero.is_zero());
        assert!(zero.is_rational());

        let sqrt_d = QuadExt::new(from_integer(0), from_integer(1));
        assert!(!sqrt_d.is_zero());
        assert!(!sqrt_d.is_rational());
    }

    #[test]
    fn display_shows_both_coefficients() {
        let x = QuadExt::new(ratio(1, 2), ratio(-3, 4));
        assert_eq!(x.to_string(), "1/2 + -3/4·√d");
    }
}
