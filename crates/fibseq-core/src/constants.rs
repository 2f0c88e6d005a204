//! Reference constants for the sequence cache and the closed-form estimator.

/// Number of fractional decimal digits carried by [`crate::fixed::Fixed`].
pub const FIXED_FRACTION_DIGITS: u32 = 100;

/// Highest index for which the closed-form estimate is guaranteed exact.
///
/// Past this index [`crate::binet::estimate`] still returns a value, but
/// emits a warning event instead of a guarantee.
pub const ACCURACY_LIMIT: u64 = 128;

/// Golden ratio φ = (1 + √5) / 2 to 113 fractional digits.
///
/// Parsed once at first use; digits beyond the fixed-point scale are
/// truncated at parse time.
pub const PHI_DIGITS: &str = "1.61803398874989484820458683436563811772030917980576286213544862270526046281890244970720720418939113748475408807538";

/// √5 to 113 fractional digits.
pub const SQRT_5_DIGITS: &str = "2.23606797749978969640917366873127623544061835961152572427089724541052092563780489941441440837878227496950817615077";

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (test oracle, fast reference).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
