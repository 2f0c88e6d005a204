#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use fibseq_core::{binet, fibonacci};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at the documented accuracy bound
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 129;

    assert_eq!(
        binet::estimate(n),
        BigInt::from(fibonacci(n)),
        "estimate != iterative at n={n}"
    );
});
