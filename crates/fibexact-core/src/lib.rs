//! # fibexact-core
//!
//! Closed-form Fibonacci computation over the field extension ℚ[√5],
//! using exact rational arithmetic throughout. Implements binary
//! exponentiation in the extension field and Binet's formula, plus the
//! naive linear/recursive references used to cross-validate both.

pub mod closed_form;
pub mod power;
pub mod reference;

// Re-exports
pub use closed_form::{ClosedFormCalculator, FibError};
pub use power::{power, power_linear};
pub use reference::fibonacci_rec;

use num_bigint::BigUint;

/// Compute F(n) via the exact closed form.
///
/// This is a convenience function for simple use cases; it builds a
/// fresh [`ClosedFormCalculator`] per call. Reuse a calculator when
/// computing many values.
///
/// # Example
/// ```
/// assert_eq!(fibexact_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fibexact_core::fibonacci(0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<BigUint, FibError> {
    ClosedFormCalculator::new().fibonacci(n)
}
