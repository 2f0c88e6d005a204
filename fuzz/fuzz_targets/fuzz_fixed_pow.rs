#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::fixed::{pow, Fixed};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // One fractional digit keeps every intermediate product exactly
    // representable for exponents below 100, so the squaring order cannot
    // change the result.
    let int_part = data[0] % 10;
    let frac_digit = data[1] % 10;
    let exp = u64::from(data[2]) % 100;

    let base = Fixed::parse(&format!("{int_part}.{frac_digit}")).expect("well-formed literal");
    let mut naive = Fixed::one();
    for _ in 0..exp {
        naive = &naive * &base;
    }
    assert_eq!(pow(&base, exp), naive, "pow != naive loop at exp={exp}");
});
