//! Field operations over `a + b·√d` coefficient pairs.
//!
//! `QuadraticField` holds the discriminant `d` and implements the ring
//! and field operations closed over the pair representation:
//!
//! ```text
//! (a1 + b1√d) + (a2 + b2√d) = (a1 + a2) + (b1 + b2)√d
//! (a1 + b1√d) · (a2 + b2√d) = (a1·a2 + d·b1·b2) + (a1·b2 + a2·b1)√d
//! 1 / (a + b√d)             = (a − b√d) / (a² − d·b²)
//! ```
//!
//! The inverse formula is valid for every nonzero element precisely
//! because `d` is not the square of a rational: `a² = d·b²` with `(a, b)`
//! not both zero would make `√d` rational. `new` rejects square
//! discriminants so that invariant holds by construction.

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{One, Signed, Zero};

use crate::element::QuadExt;
use crate::rational::Rational;

/// Error type for quadratic field arithmetic.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Attempted to invert the additive identity.
    #[error("division by zero: the additive identity has no inverse")]
    DivisionByZero,

    /// Attempted to project an element with a nonzero √d coefficient.
    #[error("irrational residue: element has a nonzero \u{221a}d component")]
    IrrationalResidue,

    /// The requested discriminant is the square of a rational, so
    /// adjoining its root would not produce a proper field extension.
    #[error("discriminant {0} is a perfect square")]
    SquareDiscriminant(Rational),
}

/// A quadratic extension field ℚ[√d] for a fixed non-square rational `d`.
///
/// All operations are pure functions over immutable [`QuadExt`] pairs;
/// the field itself is just the carrier of `d`.
///
/// # Example
/// ```
/// use fibexact_field::{from_integer, QuadraticField};
///
/// let field = QuadraticField::new(from_integer(5)).unwrap();
/// let phi = field.golden_ratio();
/// // φ² = φ + 1
/// assert_eq!(
///     field.mul(&phi, &phi),
///     field.add(&phi, &field.one()),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct QuadraticField {
    d: Rational,
}

/// Whether `n` is the square of an integer.
fn is_perfect_square(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }
    let root = n.sqrt();
    &root * &root == *n
}

impl QuadraticField {
    /// Create the extension field ℚ[√d].
    ///
    /// Fails with [`FieldError::SquareDiscriminant`] if `d` is the square
    /// of a rational. A reduced fraction p/q is a rational square exactly
    /// when p and q are both integer squares.
    pub fn new(d: Rational) -> Result<Self, FieldError> {
        if is_perfect_square(d.numer()) && is_perfect_square(d.denom()) {
            return Err(FieldError::SquareDiscriminant(d));
        }
        Ok(Self { d })
    }

    /// The discriminant `d`.
    #[must_use]
    pub fn d(&self) -> &Rational {
        &self.d
    }

    /// The additive identity `(0, 0)`.
    #[must_use]
    pub fn zero(&self) -> QuadExt {
        QuadExt::new(Rational::zero(), Rational::zero())
    }

    /// The multiplicative identity `(1, 0)`.
    #[must_use]
    pub fn one(&self) -> QuadExt {
        QuadExt::new(Rational::one(), Rational::zero())
    }

    /// The adjoined root `√d`, i.e. the pair `(0, 1)`.
    #[must_use]
    pub fn sqrt_d(&self) -> QuadExt {
        QuadExt::new(Rational::zero(), Rational::one())
    }

    /// Embed a plain rational as `(r, 0)`.
    ///
    /// The embedding is a field homomorphism: it preserves 0, 1,
    /// addition and multiplication.
    #[must_use]
    pub fn embed(&self, r: Rational) -> QuadExt {
        QuadExt::new(r, Rational::zero())
    }

    /// Embed an integer as `(n, 0)`.
    #[must_use]
    pub fn from_integer(&self, n: i64) -> QuadExt {
        self.embed(Rational::from_integer(BigInt::from(n)))
    }

    /// Component-wise addition.
    #[must_use]
    pub fn add(&self, x: &QuadExt, y: &QuadExt) -> QuadExt {
        QuadExt::new(
            &x.rational + &y.rational,
            &x.irrational + &y.irrational,
        )
    }

    /// Component-wise additive inverse.
    #[must_use]
    pub fn neg(&self, x: &QuadExt) -> QuadExt {
        QuadExt::new(-&x.rational, -&x.irrational)
    }

    /// Subtraction, `x + (−y)`.
    #[must_use]
    pub fn sub(&self, x: &QuadExt, y: &QuadExt) -> QuadExt {
        self.add(x, &self.neg(y))
    }

    /// Multiplication by expanding `(a1 + b1√d)(a2 + b2√d)`.
    #[must_use]
    pub fn mul(&self, x: &QuadExt, y: &QuadExt) -> QuadExt {
        let rational =
            &x.rational * &y.rational + &self.d * (&x.irrational * &y.irrational);
        let irrational = &x.rational * &y.irrational + &y.rational * &x.irrational;
        QuadExt::new(rational, irrational)
    }

    /// Multiplicative inverse via the conjugate.
    ///
    /// Fails with [`FieldError::DivisionByZero`] only on `(0, 0)`; for
    /// every other element the norm `a² − d·b²` is nonzero because `d`
    /// is not a rational square.
    pub fn invert(&self, x: &QuadExt) -> Result<QuadExt, FieldError> {
        if x.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let norm = &x.rational * &x.rational - &self.d * (&x.irrational * &x.irrational);
        debug_assert!(!norm.is_zero(), "norm of a nonzero element vanished");
        Ok(QuadExt::new(
            &x.rational / &norm,
            -&x.irrational / &norm,
        ))
    }

    /// Recover the plain rational from an element lying in the base field.
    ///
    /// Fails with [`FieldError::IrrationalResidue`] if the √d coefficient
    /// is nonzero.
    pub fn project(&self, x: &QuadExt) -> Result<Rational, FieldError> {
        if x.is_rational() {
            Ok(x.rational.clone())
        } else {
            Err(FieldError::IrrationalResidue)
        }
    }

    /// The golden ratio `(1 + √d)/2` as an element of this field.
    ///
    /// Meaningful for d = 5, where it satisfies `φ² = φ + 1`; defined for
    /// any discriminant as a convenience constructor.
    #[must_use]
    pub fn golden_ratio(&self) -> QuadExt {
        let half = Rational::new(BigInt::one(), BigInt::from(2));
        QuadExt::new(half.clone(), half)
    }
}
