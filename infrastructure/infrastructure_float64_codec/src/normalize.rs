//! Exact Binary Normalization
//!
//! Shared helper for the encoder: scales an exact positive magnitude into
//! the form `m × 2^e` with `1 <= m < 2`, working entirely in rational
//! arithmetic. Repeatedly doubling or halving a finite-precision binary
//! float here would reintroduce rounding before the codec's own rounding
//! step, so the native float domain is never entered.

use malachite::base::num::basic::traits::{One, Two};
use malachite::Rational;

/// Normalize an exact positive magnitude.
///
/// # Arguments
/// * `magnitude` - The value to normalize; must be strictly positive
///
/// # Returns
/// The unique pair `(m, e)` with `magnitude = m × 2^e` and `1 <= m < 2`.
/// `e` may be negative.
pub fn normalize(magnitude: &Rational) -> (Rational, i64) {
    let mut m = magnitude.clone();
    let mut e: i64 = 0;
    while m >= Rational::TWO {
        m /= Rational::TWO;
        e += 1;
    }
    while m < Rational::ONE {
        m *= Rational::TWO;
        e -= 1;
    }
    (m, e)
}

/// 2 raised to an integer power, as an exact rational.
///
/// Step count is bounded by `|exponent|`, which the codec never pushes past
/// the subnormal scaling range (~1075).
pub fn pow2(exponent: i64) -> Rational {
    let mut result = Rational::ONE;
    if exponent >= 0 {
        for _ in 0..exponent {
            result *= Rational::TWO;
        }
    } else {
        for _ in 0..-exponent {
            result /= Rational::TWO;
        }
    }
    result
}
