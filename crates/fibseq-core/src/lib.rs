//! # fibseq-core
//!
//! Core library for fibseq: a process-wide memoized Fibonacci sequence
//! cache and a closed-form (Binet) estimator used to cross-check it.
//!
//! The cache grows incrementally — each [`SequenceCache::advance`] appends
//! the sum of the last two entries — while [`binet::estimate`] maps an index
//! straight to an approximate value through the golden-ratio identity. The
//! two are independent; consumers compare them index by index, and the point
//! where they diverge is the estimator's documented accuracy breakdown.

pub mod binet;
pub mod cache;
pub mod constants;
pub mod fixed;

// Re-exports
pub use binet::estimate;
pub use cache::{SequenceCache, SequenceIter, SequenceView};
pub use constants::{ACCURACY_LIMIT, FIB_TABLE, FIXED_FRACTION_DIGITS, MAX_FIB_U64};
pub use fixed::{pow, Fixed, ParseFixedError};

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute F(n) by direct iteration.
///
/// O(n) baseline, independent of both the shared cache and the estimator.
/// Used as the oracle in tests and by embedders that need a one-off value
/// without going through the process-wide cache.
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibseq_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
