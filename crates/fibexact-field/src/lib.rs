//! # fibexact-field
//!
//! Exact arithmetic for quadratic field extensions of the rationals.
//! Represents numbers of the form `a + b·√d` for a fixed non-square
//! rational `d` as a pair of [`Rational`] coefficients, and implements
//! the field operations closed over that representation. No floating
//! point anywhere; every operation is exact.

pub mod element;
pub mod field;
pub mod rational;

// Re-exports
pub use element::QuadExt;
pub use field::{FieldError, QuadraticField};
pub use rational::{from_integer, is_integer, ratio, Rational};
