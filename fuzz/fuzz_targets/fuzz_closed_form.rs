#![no_main]

use libfuzzer_sys::fuzz_target;
use num_traits::Zero;

use fibexact_core::{fibonacci_rec, ClosedFormCalculator};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Cap n so the exponential-time oracle stays tractable.
    let n = u64::from(data[0]) % 26;

    let calc = ClosedFormCalculator::new();
    let closed = calc.fibonacci(n).expect("closed form must not fail");
    assert_eq!(closed, fibonacci_rec(n), "closed form != oracle at n={n}");

    // The intermediate must lie in the base field for every n, also
    // beyond the oracle's reach.
    let large = u64::from(data[0]) * 7 + 1;
    assert!(
        calc.extended_value(large).irrational.is_zero(),
        "irrational residue at n={large}"
    );
});
