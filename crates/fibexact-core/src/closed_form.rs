//! Closed-form Fibonacci computation over ℚ[√5].
//!
//! Uses Binet's formula evaluated exactly in the field extension:
//!
//! ```text
//! F(n) = (φ^n − ψ^n) / √5        with φ = (1+√5)/2, ψ = 1 − φ
//! ```
//!
//! In the pair representation `φ^n − ψ^n` is exactly `(0, F(n))`, so
//! multiplying by the precomputed `1/√5 = (0, 1/5)` lands on
//! `(F(n), 0)`: a value whose irrational component vanishes and whose
//! rational component is the answer. That vanishing is an invariant of
//! the arithmetic, not a rounding step. A nonzero residue means the
//! field implementation is broken and is surfaced as a fatal error,
//! never coerced.

use num_bigint::BigUint;
use tracing::debug;

use fibexact_field::{is_integer, QuadExt, QuadraticField};

use crate::power::power;

/// Error type for the closed-form computation.
///
/// Every variant is an internal-consistency failure: the mathematics
/// guarantees none of them can occur, so observing one indicates a
/// defect in the field arithmetic. They are deterministic and must be
/// treated as fatal by callers (retrying reproduces the same error).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The difference `φ^n − ψ^n` divided by √5 kept a nonzero √5
    /// coefficient.
    #[error("irrational residue computing F({n}): {residue}")]
    IrrationalResidue {
        /// The requested Fibonacci index.
        n: u64,
        /// The offending √5 coefficient, for diagnostics.
        residue: String,
    },

    /// The projected rational was not integer-valued.
    #[error("F({n}) projected to the non-integer {value}")]
    NotAnInteger {
        /// The requested Fibonacci index.
        n: u64,
        /// The offending rational, for diagnostics.
        value: String,
    },

    /// The projected integer was negative.
    #[error("F({n}) projected to the negative value {value}")]
    Negative {
        /// The requested Fibonacci index.
        n: u64,
        /// The offending integer, for diagnostics.
        value: String,
    },
}

/// Closed-form Fibonacci calculator.
///
/// Fixes the discriminant d = 5 and precomputes φ, ψ = 1 − φ and 1/√5
/// once; each call to [`fibonacci`](Self::fibonacci) then costs O(log n)
/// exact field multiplications.
///
/// # Example
/// ```
/// use fibexact_core::closed_form::ClosedFormCalculator;
///
/// let calc = ClosedFormCalculator::new();
/// assert_eq!(calc.fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(calc.fibonacci(0).unwrap().to_string(), "0");
/// ```
pub struct ClosedFormCalculator {
    field: QuadraticField,
    phi: QuadExt,
    psi: QuadExt,
    inv_sqrt5: QuadExt,
}

impl ClosedFormCalculator {
    /// Create a calculator over ℚ[√5].
    #[must_use]
    pub fn new() -> Self {
        let field = QuadraticField::new(fibexact_field::from_integer(5))
            .expect("5 is not a perfect square");
        let phi = field.golden_ratio();
        let psi = field.sub(&field.one(), &phi);
        let inv_sqrt5 = field
            .invert(&field.sqrt_d())
            .expect("sqrt(5) is nonzero");
        Self {
            field,
            phi,
            psi,
            inv_sqrt5,
        }
    }

    /// The underlying field ℚ[√5].
    #[must_use]
    pub fn field(&self) -> &QuadraticField {
        &self.field
    }

    /// The golden ratio φ = (1 + √5)/2.
    #[must_use]
    pub fn phi(&self) -> &QuadExt {
        &self.phi
    }

    /// Compute the value `(φ^n − ψ^n) / √5` in the extension field.
    ///
    /// For every natural `n` its irrational component is exactly zero;
    /// that invariant is what [`fibonacci`](Self::fibonacci) validates
    /// before projecting.
    #[must_use]
    pub fn extended_value(&self, n: u64) -> QuadExt {
        let a = power(&self.field, &self.phi, n);
        let b = power(&self.field, &self.psi, n);
        let diff = self.field.sub(&a, &b);
        self.field.mul(&diff, &self.inv_sqrt5)
    }

    /// Compute F(n) via the closed form.
    ///
    /// Errors are internal-consistency failures only; every `n` is a
    /// valid input.
    pub fn fibonacci(&self, n: u64) -> Result<BigUint, FibError> {
        let value = self.extended_value(n);
        debug!(n, value = %value, "projecting closed-form value");

        let r = self
            .field
            .project(&value)
            .map_err(|_| FibError::IrrationalResidue {
                n,
                residue: value.irrational.to_string(),
            })?;

        if !is_integer(&r) {
            return Err(FibError::NotAnInteger {
                n,
                value: r.to_string(),
            });
        }
        r.numer().to_biguint().ok_or_else(|| FibError::Negative {
            n,
            value: r.numer().to_string(),
        })
    }
}

impl Default for ClosedFormCalculator {
    fn default() -> Self {
        Self::new()
    }
}
