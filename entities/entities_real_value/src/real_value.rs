//! Exact Real Value Operations
//!
//! Provides the arbitrary-precision real value type consumed and produced by
//! the binary64 codec.
//!
//! # Purpose
//!
//! A native `f64` cannot serve as the codec's working representation: the
//! whole point of the codec is to control exactly where precision is lost,
//! and routing values through a binary float would round them before the
//! intended rounding step. This module instead represents every finite value
//! as a sign plus an exact non-negative `malachite::Rational` magnitude,
//! which keeps signed zero distinguishable and makes error analysis against
//! the original pre-encoding value exact.
//!
//! # Implementation Details
//!
//! This module uses the `malachite` crate's `Rational` type for
//! arbitrary-precision rational arithmetic. Equality on [`RealValue`] is
//! structural: `+0` and `-0` compare unequal, and `NaN == NaN` holds. This
//! matches what the codec's round-trip tests need (bit-level fidelity), not
//! IEEE comparison semantics.
//!
//! # Examples
//!
//! ```rust
//! use entities_real_value::{RealValue, Sign};
//!
//! let v = RealValue::from_f64(-12.375);
//! assert_eq!(v.sign(), Sign::Negative);
//! assert!(v.is_finite());
//!
//! let zero = RealValue::zero(Sign::Negative);
//! assert!(zero.is_zero());
//! assert_eq!(zero.sign(), Sign::Negative);
//! ```

use malachite::base::num::arithmetic::traits::{Abs, Floor};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Rational};

/// Sign of a real value.
///
/// Carried separately from the magnitude so that signed zero survives the
/// round trip through the bit representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Return the opposite sign.
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// True if this is the negative sign.
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

/// Exact real value: finite sign-and-magnitude, signed infinity, or NaN.
///
/// The magnitude of a finite value is always non-negative; magnitude zero
/// combined with the sign gives signed zero. NaN carries no sign and no
/// payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RealValue {
    /// A finite value. `magnitude` is always `>= 0`.
    Finite { sign: Sign, magnitude: Rational },
    /// Positive or negative infinity.
    Infinite { sign: Sign },
    /// The unsigned, payload-less NaN marker.
    NaN,
}

impl RealValue {
    /// Create a signed zero.
    pub fn zero(sign: Sign) -> Self {
        RealValue::Finite {
            sign,
            magnitude: Rational::ZERO,
        }
    }

    /// Create a signed infinity.
    pub fn infinity(sign: Sign) -> Self {
        RealValue::Infinite { sign }
    }

    /// Create the NaN marker.
    pub fn nan() -> Self {
        RealValue::NaN
    }

    /// Create a finite value from an exact rational.
    ///
    /// The sign is taken from the rational itself; a zero rational produces
    /// positive zero.
    pub fn from_rational(value: Rational) -> Self {
        let sign = if value < Rational::ZERO {
            Sign::Negative
        } else {
            Sign::Positive
        };
        RealValue::Finite {
            sign,
            magnitude: value.abs(),
        }
    }

    /// Create a value from a native `f64`, exactly.
    ///
    /// Every finite `f64` is a dyadic rational and converts without loss.
    /// `-0.0` maps to negative zero, infinities to signed infinity, and NaN
    /// to the unsigned NaN marker.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return RealValue::NaN;
        }
        let sign = if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        if value.is_infinite() {
            return RealValue::Infinite { sign };
        }
        // Finite f64 -> Rational conversion is exact and cannot fail.
        let magnitude = Rational::try_from(value.abs()).unwrap_or(Rational::ZERO);
        RealValue::Finite { sign, magnitude }
    }

    /// The sign of the value.
    ///
    /// NaN reports `Sign::Positive`, matching its canonical sign-bit-zero
    /// encoding.
    pub fn sign(&self) -> Sign {
        match self {
            RealValue::Finite { sign, .. } => *sign,
            RealValue::Infinite { sign } => *sign,
            RealValue::NaN => Sign::Positive,
        }
    }

    /// The magnitude of a finite value, or `None` for infinities and NaN.
    pub fn magnitude(&self) -> Option<&Rational> {
        match self {
            RealValue::Finite { magnitude, .. } => Some(magnitude),
            _ => None,
        }
    }

    /// True for finite values (including both zeros).
    pub fn is_finite(&self) -> bool {
        matches!(self, RealValue::Finite { .. })
    }

    /// True for positive or negative zero.
    pub fn is_zero(&self) -> bool {
        match self {
            RealValue::Finite { magnitude, .. } => *magnitude == Rational::ZERO,
            _ => false,
        }
    }

    /// True for positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        matches!(self, RealValue::Infinite { .. })
    }

    /// True for the NaN marker.
    pub fn is_nan(&self) -> bool {
        matches!(self, RealValue::NaN)
    }

    /// The value as a signed rational, or `None` for infinities and NaN.
    ///
    /// Sign-of-zero information is lost here since the rational zero is
    /// unsigned; callers that need it should use [`RealValue::sign`].
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            RealValue::Finite { sign, magnitude } => {
                if sign.is_negative() {
                    Some(-magnitude.clone())
                } else {
                    Some(magnitude.clone())
                }
            }
            _ => None,
        }
    }

    /// Convert to a native `f64` at the public boundary.
    ///
    /// This conversion is lossy for values needing more than 53 significand
    /// bits; the exact path through the codec never uses it.
    pub fn to_f64(&self) -> f64 {
        match self {
            RealValue::Finite { sign, magnitude } => {
                if *magnitude == Rational::ZERO {
                    return if sign.is_negative() { -0.0 } else { 0.0 };
                }
                let (value, _ordering) = f64::rounding_from(magnitude, RoundingMode::Nearest);
                if sign.is_negative() {
                    -value
                } else {
                    value
                }
            }
            RealValue::Infinite { sign } => {
                if sign.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            RealValue::NaN => f64::NAN,
        }
    }

    /// Exact absolute difference against another value.
    ///
    /// Returns `None` if either value is infinite or NaN. Zero signs are
    /// ignored (`|-0 - +0| = 0`).
    pub fn abs_error(&self, other: &Self) -> Option<Rational> {
        let a = self.to_rational()?;
        let b = other.to_rational()?;
        Some((a - b).abs())
    }

    /// Exact relative error of `self` measured against `exact`.
    ///
    /// Returns `None` if either value is non-finite or if `exact` is zero
    /// (where relative error is undefined).
    pub fn relative_error_vs(&self, exact: &Self) -> Option<Rational> {
        let reference = exact.to_rational()?;
        if reference == Rational::ZERO {
            return None;
        }
        let diff = self.abs_error(exact)?;
        Some(diff / reference.abs())
    }

    /// Render the value as exact decimal text, up to `max_digits` fractional
    /// digits.
    ///
    /// Dyadic rationals (everything the decoder produces) have terminating
    /// decimal expansions and render exactly; if the expansion does not
    /// terminate within `max_digits` digits, the output is truncated and
    /// suffixed with `...`.
    pub fn to_decimal_string(&self, max_digits: usize) -> String {
        let (sign, magnitude) = match self {
            RealValue::Finite { sign, magnitude } => (sign, magnitude),
            RealValue::Infinite { sign } => {
                return if sign.is_negative() {
                    "-inf".to_string()
                } else {
                    "inf".to_string()
                };
            }
            RealValue::NaN => return "nan".to_string(),
        };

        let mut out = String::new();
        if sign.is_negative() {
            out.push('-');
        }

        let whole: Integer = magnitude.clone().floor();
        out.push_str(&whole.to_string());

        let mut fraction = magnitude - &Rational::from(whole);
        if fraction == Rational::ZERO {
            return out;
        }

        out.push('.');
        for _ in 0..max_digits {
            fraction *= Rational::from(10u32);
            let digit: Integer = fraction.clone().floor();
            let digit_value = u64::try_from(&digit).unwrap_or(0);
            out.push(char::from(b'0' + digit_value as u8));
            fraction -= Rational::from(digit);
            if fraction == Rational::ZERO {
                return out;
            }
        }
        out.push_str("...");
        out
    }
}

impl std::fmt::Display for RealValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1074 fractional digits covers the longest exact binary64 expansion.
        write!(f, "{}", self.to_decimal_string(1074))
    }
}

/// 10 raised to a non-negative integer power, as an exact rational.
pub fn pow10(exponent: u64) -> Rational {
    let mut result = Rational::ONE;
    for _ in 0..exponent {
        result *= Rational::from(10u32);
    }
    result
}
