//! Fixed-precision decimal arithmetic for the closed-form estimator.
//!
//! [`Fixed`] is a scaled-integer decimal: a signed big-integer mantissa with
//! an implicit scale of [`FIXED_FRACTION_DIGITS`] fractional decimal digits.
//! Multiplication, division, and integer conversion truncate toward zero at
//! the last fractional digit.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::constants::FIXED_FRACTION_DIGITS;

/// Error parsing a decimal literal into a [`Fixed`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFixedError {
    /// The input contained no digits.
    #[error("empty decimal literal")]
    Empty,

    /// The input contained a character that is not a digit, sign, or point.
    #[error("invalid character {0:?} in decimal literal")]
    InvalidCharacter(char),
}

/// Signed fixed-point decimal with [`FIXED_FRACTION_DIGITS`] fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed {
    /// Value scaled by `10^FIXED_FRACTION_DIGITS`.
    units: BigInt,
}

fn scale_factor() -> &'static BigInt {
    static FACTOR: OnceLock<BigInt> = OnceLock::new();
    FACTOR.get_or_init(|| BigInt::from(10u32).pow(FIXED_FRACTION_DIGITS))
}

impl Fixed {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            units: BigInt::zero(),
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            units: scale_factor().clone(),
        }
    }

    /// An exact integer value.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self {
            units: BigInt::from(value) * scale_factor(),
        }
    }

    /// `10^exponent`. Exponents below the fractional scale underflow to zero.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn exp10(exponent: i32) -> Self {
        let shifted = exponent + FIXED_FRACTION_DIGITS as i32;
        if shifted < 0 {
            return Self::zero();
        }
        Self {
            units: BigInt::from(10u32).pow(shifted as u32),
        }
    }

    /// Parse a plain decimal literal (`-?digits[.digits]`).
    ///
    /// Fractional digits beyond the fixed-point scale are truncated.
    pub fn parse(input: &str) -> Result<Self, ParseFixedError> {
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match rest.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (rest, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseFixedError::Empty);
        }

        let scale = FIXED_FRACTION_DIGITS as usize;
        let mut digits = String::with_capacity(int_part.len() + scale);
        for c in int_part.chars() {
            if !c.is_ascii_digit() {
                return Err(ParseFixedError::InvalidCharacter(c));
            }
            digits.push(c);
        }
        let mut frac_len = 0;
        for c in frac_part.chars() {
            if !c.is_ascii_digit() {
                return Err(ParseFixedError::InvalidCharacter(c));
            }
            if frac_len < scale {
                digits.push(c);
                frac_len += 1;
            }
        }
        for _ in frac_len..scale {
            digits.push('0');
        }

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseFixedError::Empty)?;
        Ok(Self {
            units: if negative { -magnitude } else { magnitude },
        })
    }

    /// Truncate toward zero to an integer.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        &self.units / scale_factor()
    }
}

impl Add for &Fixed {
    type Output = Fixed;

    fn add(self, rhs: &Fixed) -> Fixed {
        Fixed {
            units: &self.units + &rhs.units,
        }
    }
}

impl Sub for &Fixed {
    type Output = Fixed;

    fn sub(self, rhs: &Fixed) -> Fixed {
        Fixed {
            units: &self.units - &rhs.units,
        }
    }
}

impl Neg for &Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed {
            units: -&self.units,
        }
    }
}

impl Mul for &Fixed {
    type Output = Fixed;

    fn mul(self, rhs: &Fixed) -> Fixed {
        Fixed {
            units: (&self.units * &rhs.units) / scale_factor(),
        }
    }
}

impl Div for &Fixed {
    type Output = Fixed;

    /// Truncating division. Panics if `rhs` is zero.
    fn div(self, rhs: &Fixed) -> Fixed {
        Fixed {
            units: (&self.units * scale_factor()) / &rhs.units,
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.units.abs();
        let int_part = &magnitude / scale_factor();
        let frac_part = &magnitude % scale_factor();
        let sign = if self.units.is_negative() { "-" } else { "" };
        if frac_part.is_zero() {
            write!(f, "{sign}{int_part}")
        } else {
            let frac = frac_part.to_string();
            let padded = format!("{frac:0>width$}", width = FIXED_FRACTION_DIGITS as usize);
            write!(f, "{sign}{int_part}.{}", padded.trim_end_matches('0'))
        }
    }
}

/// Raise `base` to an arbitrary non-negative integer power.
///
/// Exponentiation by squaring over the fixed-point type: test the low bit of
/// the exponent, multiply the accumulator when it is set, shift the exponent
/// down, square the base, and stop once the exponent reaches zero. This is
/// the only exponentiation strategy in the crate.
#[must_use]
pub fn pow(base: &Fixed, mut exp: u64) -> Fixed {
    let mut base = base.clone();
    let mut acc = Fixed::one();
    loop {
        if exp & 1 == 1 {
            acc = &acc * &base;
        }
        exp >>= 1;
        if exp == 0 {
            break;
        }
        base = &base * &base;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer() {
        assert_eq!(Fixed::parse("42").unwrap(), Fixed::from_integer(42));
        assert_eq!(Fixed::parse("-7").unwrap(), Fixed::from_integer(-7));
        assert_eq!(Fixed::parse("0").unwrap(), Fixed::zero());
    }

    #[test]
    fn parse_fraction() {
        let half = Fixed::parse("0.5").unwrap();
        assert_eq!(&half + &half, Fixed::one());
        assert_eq!(Fixed::parse(".5").unwrap(), half);
        assert_eq!(Fixed::parse("-0.5").unwrap(), -&half);
    }

    #[test]
    fn parse_truncates_excess_fraction_digits() {
        let long = format!("0.{}", "1".repeat(150));
        let short = format!("0.{}", "1".repeat(100));
        assert_eq!(Fixed::parse(&long).unwrap(), Fixed::parse(&short).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Fixed::parse(""), Err(ParseFixedError::Empty));
        assert_eq!(Fixed::parse("."), Err(ParseFixedError::Empty));
        assert_eq!(
            Fixed::parse("1.2.3"),
            Err(ParseFixedError::InvalidCharacter('.'))
        );
        assert_eq!(
            Fixed::parse("1x"),
            Err(ParseFixedError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn display_round_trips_simple_values() {
        assert_eq!(Fixed::parse("1.5").unwrap().to_string(), "1.5");
        assert_eq!(Fixed::parse("-2.25").unwrap().to_string(), "-2.25");
        assert_eq!(Fixed::from_integer(12).to_string(), "12");
    }

    #[test]
    fn multiplication_truncates_at_the_scale() {
        // 1e-60 squared is 1e-120, below the scale, so the product is zero.
        let tiny = Fixed::exp10(-60);
        assert_eq!(&tiny * &tiny, Fixed::zero());
    }

    #[test]
    fn division_truncates_toward_zero() {
        let one = Fixed::one();
        let three = Fixed::from_integer(3);
        let third = &one / &three;
        // 0.333…3 * 3 = 0.999…9, which truncates to zero as an integer.
        let almost_one = &third * &three;
        assert!(almost_one < one);
        assert_eq!(almost_one.to_bigint(), BigInt::zero());
    }

    #[test]
    fn to_bigint_truncates_negatives_toward_zero() {
        assert_eq!(
            Fixed::parse("-1.9").unwrap().to_bigint(),
            BigInt::from(-1i32)
        );
        assert_eq!(Fixed::parse("1.9").unwrap().to_bigint(), BigInt::from(1i32));
    }

    #[test]
    fn exp10_values() {
        assert_eq!(Fixed::exp10(0), Fixed::one());
        assert_eq!(Fixed::exp10(2), Fixed::from_integer(100));
        assert_eq!(Fixed::exp10(-1), Fixed::parse("0.1").unwrap());
        assert_eq!(Fixed::exp10(-101), Fixed::zero());
    }

    /// Exponents 0, 1, 2, 5, 10, 100 against a naive multiplication loop.
    /// A single fractional digit keeps every intermediate product exactly
    /// representable, so the squaring order cannot change the result.
    #[test]
    fn pow_matches_naive_loop() {
        let base = Fixed::parse("1.5").unwrap();
        for exp in [0u64, 1, 2, 5, 10, 100] {
            let mut naive = Fixed::one();
            for _ in 0..exp {
                naive = &naive * &base;
            }
            assert_eq!(pow(&base, exp), naive, "mismatch at exponent {exp}");
        }
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        assert_eq!(pow(&Fixed::zero(), 0), Fixed::one());
        assert_eq!(pow(&Fixed::from_integer(9), 0), Fixed::one());
    }

    #[test]
    fn pow_alternates_sign_for_negative_base() {
        let base = Fixed::parse("-0.5").unwrap();
        assert_eq!(pow(&base, 2), Fixed::parse("0.25").unwrap());
        assert_eq!(pow(&base, 3), Fixed::parse("-0.125").unwrap());
    }

    #[test]
    fn pow_small_integer_values() {
        assert_eq!(pow(&Fixed::from_integer(2), 10), Fixed::from_integer(1024));
        assert_eq!(pow(&Fixed::from_integer(3), 4), Fixed::from_integer(81));
    }
}
