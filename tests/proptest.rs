//! Property-based tests for the exact field arithmetic and the
//! Fibonacci closed form.
//!
//! These re-express the design invariants (field axioms, squaring vs.
//! linear exponentiation, vanishing irrational component, closed form
//! vs. recursion) as randomized properties over bounded ranges.

use num_traits::Zero;
use proptest::prelude::*;

use fibexact_core::{fibonacci_rec, power, power_linear, ClosedFormCalculator};
use fibexact_field::{from_integer, ratio, QuadExt, QuadraticField};

/// Non-square discriminants exercised by the generic field properties.
static DISCRIMINANTS: [i64; 6] = [2, 3, 5, 7, 10, -1];

fn arb_field() -> impl Strategy<Value = QuadraticField> {
    prop::sample::select(&DISCRIMINANTS[..])
        .prop_map(|d| QuadraticField::new(from_integer(d)).expect("non-square discriminant"))
}

/// Elements with small coefficients; denominators stay nonzero.
fn arb_element() -> impl Strategy<Value = QuadExt> {
    (-20i64..=20, 1i64..=12, -20i64..=20, 1i64..=12)
        .prop_map(|(an, ad, bn, bd)| QuadExt::new(ratio(an, ad), ratio(bn, bd)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Addition is commutative and associative with identity 0.
    #[test]
    fn additive_group_axioms(f in arb_field(), x in arb_element(), y in arb_element(), z in arb_element()) {
        prop_assert_eq!(f.add(&x, &y), f.add(&y, &x));
        prop_assert_eq!(f.add(&x, &f.add(&y, &z)), f.add(&f.add(&x, &y), &z));
        prop_assert_eq!(f.add(&x, &f.zero()), x.clone());
        prop_assert_eq!(f.add(&x, &f.neg(&x)), f.zero());
    }

    /// Multiplication is commutative and associative with identity 1.
    #[test]
    fn multiplicative_monoid_axioms(f in arb_field(), x in arb_element(), y in arb_element(), z in arb_element()) {
        prop_assert_eq!(f.mul(&x, &y), f.mul(&y, &x));
        prop_assert_eq!(f.mul(&x, &f.mul(&y, &z)), f.mul(&f.mul(&x, &y), &z));
        prop_assert_eq!(f.mul(&x, &f.one()), x.clone());
    }

    /// Multiplication distributes over addition.
    #[test]
    fn distributivity(f in arb_field(), x in arb_element(), y in arb_element(), z in arb_element()) {
        prop_assert_eq!(
            f.mul(&x, &f.add(&y, &z)),
            f.add(&f.mul(&x, &y), &f.mul(&x, &z))
        );
    }

    /// Every nonzero element has a multiplicative inverse.
    #[test]
    fn multiplicative_inverse(f in arb_field(), x in arb_element()) {
        prop_assume!(!x.is_zero());
        let inv = f.invert(&x).unwrap();
        prop_assert_eq!(f.mul(&x, &inv), f.one());
    }

    /// The embedding preserves addition and multiplication.
    #[test]
    fn embedding_homomorphism(f in arb_field(), a in -50i64..=50, b in -50i64..=50) {
        let ea = f.embed(from_integer(a));
        let eb = f.embed(from_integer(b));
        prop_assert_eq!(f.add(&ea, &eb), f.embed(from_integer(a + b)));
        prop_assert_eq!(f.mul(&ea, &eb), f.embed(from_integer(a * b)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Squaring exponentiation equals linear exponentiation.
    #[test]
    fn power_equals_power_linear(f in arb_field(), x in arb_element(), n in 0u64..=30) {
        prop_assert_eq!(
            power(&f, &x, n),
            power_linear(&f, &x, n),
            "power mismatch at n={}", n
        );
    }

    /// x^(m+n) = x^m * x^n for the fast path.
    #[test]
    fn power_is_a_homomorphism(f in arb_field(), x in arb_element(), m in 0u64..=15, n in 0u64..=15) {
        prop_assert_eq!(
            power(&f, &x, m + n),
            f.mul(&power(&f, &x, m), &power(&f, &x, n))
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Closed form agrees with the recursive oracle for small n.
    #[test]
    fn closed_form_equals_recursive(n in 0u64..=25) {
        let calc = ClosedFormCalculator::new();
        prop_assert_eq!(
            calc.fibonacci(n).unwrap(),
            fibonacci_rec(n),
            "F({}) closed != recursive", n
        );
    }

    /// The closed-form intermediate has zero irrational component.
    #[test]
    fn irrational_component_vanishes(n in 0u64..=200) {
        let calc = ClosedFormCalculator::new();
        let value = calc.extended_value(n);
        prop_assert!(
            value.irrational.is_zero(),
            "nonzero sqrt(5) coefficient at n={}: {}", n, value.irrational
        );
    }
}
