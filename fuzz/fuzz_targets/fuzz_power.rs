#![no_main]

use libfuzzer_sys::fuzz_target;

use fibexact_core::{power, power_linear};
use fibexact_field::{from_integer, ratio, QuadExt, QuadraticField};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // Byte 0: exponent, capped so the linear reference stays cheap.
    // Byte 1: discriminant selector. Bytes 2-5: element coefficients.
    let n = u64::from(data[0]) % 128;
    let d = [2i64, 3, 5, 7, 10, -1][usize::from(data[1]) % 6];

    let an = i64::from(data[2] as i8);
    let bn = i64::from(data[3] as i8);
    let ad = i64::from(data[4] % 16) + 1;
    let bd = i64::from(data[5] % 16) + 1;

    let field = QuadraticField::new(from_integer(d)).expect("non-square discriminant");
    let x = QuadExt::new(ratio(an, ad), ratio(bn, bd));

    let fast = power(&field, &x, n);
    let linear = power_linear(&field, &x, n);
    assert_eq!(fast, linear, "power != power_linear at n={n}, d={d}");
});
