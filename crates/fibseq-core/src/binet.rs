//! Closed-form (Binet) Fibonacci estimator.
//!
//! Computes `F(n) ≈ (φⁿ − ψⁿ) / √5` directly from the golden-ratio identity
//! in fixed-precision decimal arithmetic, without consulting the sequence
//! cache. Accuracy is a function of the requested index: results are exact
//! up to [`ACCURACY_LIMIT`] and degrade once accumulated rounding error at
//! the fixed scale reaches a whole unit.

use std::sync::OnceLock;

use num_bigint::BigInt;

use crate::constants::{ACCURACY_LIMIT, PHI_DIGITS, SQRT_5_DIGITS};
use crate::fixed::{pow, Fixed};

fn phi() -> &'static Fixed {
    static PHI: OnceLock<Fixed> = OnceLock::new();
    PHI.get_or_init(|| Fixed::parse(PHI_DIGITS).expect("phi reference digits are well-formed"))
}

/// ψ = 1 − φ, the conjugate root of `x² = x + 1`.
fn psi() -> &'static Fixed {
    static PSI: OnceLock<Fixed> = OnceLock::new();
    PSI.get_or_init(|| &Fixed::one() - phi())
}

fn sqrt_5() -> &'static Fixed {
    static SQRT_5: OnceLock<Fixed> = OnceLock::new();
    SQRT_5
        .get_or_init(|| Fixed::parse(SQRT_5_DIGITS).expect("sqrt(5) reference digits are well-formed"))
}

/// Guard added before the truncating integer conversion.
///
/// The exact quotient is an integer, and for indices within the accuracy
/// bound the accumulated fixed-point error stays under 1e-70 in magnitude,
/// of either sign; lifting the quotient by 1e-50 keeps the truncation from
/// landing one below the integer it sits against.
fn truncation_guard() -> &'static Fixed {
    static GUARD: OnceLock<Fixed> = OnceLock::new();
    GUARD.get_or_init(|| Fixed::exp10(-50))
}

/// Estimate `F(n)` from the closed form, without touching the cache.
///
/// Exact for `n <= 128`. Past that bound the value is still returned as
/// computed — never an error — and a warning event is emitted, since
/// fixed-precision rounding error is no longer guaranteed to stay below one
/// unit.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// assert_eq!(fibseq_core::binet::estimate(10), BigInt::from(55u32));
/// ```
#[must_use]
pub fn estimate(n: u64) -> BigInt {
    if n > ACCURACY_LIMIT {
        tracing::warn!(
            n,
            limit = ACCURACY_LIMIT,
            "estimate past the accuracy bound; the returned value may be incorrect"
        );
    }
    let phi_n = pow(phi(), n);
    let psi_n = pow(psi(), n);
    let quotient = &(&phi_n - &psi_n) / sqrt_5();
    (&quotient + truncation_guard()).to_bigint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn boundary_indices_do_not_divide_by_zero() {
        // φ⁰ − ψ⁰ = 0: the division must still run and yield the boundary
        // values, not fail.
        assert_eq!(estimate(0), BigInt::from(0u32));
        assert_eq!(estimate(1), BigInt::from(1u32));
    }

    #[test]
    fn small_values() {
        assert_eq!(estimate(2), BigInt::from(1u32));
        assert_eq!(estimate(5), BigInt::from(5u32));
        assert_eq!(estimate(10), BigInt::from(55u32));
    }

    #[test]
    fn matches_the_table_through_f93() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(estimate(n as u64), BigInt::from(expected), "at n={n}");
        }
    }

    #[test]
    fn exact_through_the_accuracy_limit() {
        for n in 0..=ACCURACY_LIMIT {
            assert_eq!(
                estimate(n),
                BigInt::from(crate::fibonacci(n)),
                "estimate diverged inside the documented bound at n={n}"
            );
        }
    }

    #[test]
    fn past_the_limit_still_returns_a_value() {
        assert!(estimate(129) > BigInt::from(0u32));
        assert!(estimate(200) > estimate(129));
    }
}
