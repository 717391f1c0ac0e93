//! Real-to-binary64 Encoding
//!
//! Converts an exact [`RealValue`] plus a [`RoundingMode`] into the unique
//! 64-bit pattern a conforming IEEE 754 binary64 encoder with that rounding
//! policy would produce. The operation is total: every finite value,
//! infinity, and NaN has a defined encoding, so no error type exists here.
//!
//! All quantization happens in exact rational arithmetic; the significand
//! bits are produced by repeated exact doubling, and only then is the chosen
//! rounding discipline applied to the single guard bit.

use entities_real_value::{RealValue, Sign};
use malachite::base::num::basic::traits::{One, Two, Zero};
use malachite::Rational;

use crate::bits::Float64Bits;
use crate::constants::{
    CANONICAL_NAN_FRACTION, EXPONENT_BIAS, EXPONENT_FIELD_MAX, FRACTION_BITS, FRACTION_OVERFLOW,
    SUBNORMAL_EXPONENT,
};
use crate::normalize::{normalize, pow2};
use crate::rounding::RoundingMode;

/// Encode an exact real value as a binary64 bit string.
///
/// # Arguments
/// * `value` - The value to encode
/// * `mode` - The rounding discipline for inexact significands
///
/// # Returns
/// The 64-character bit string. Magnitudes above the representable range
/// saturate to signed infinity; magnitudes below the subnormal range flush
/// to signed zero; every NaN input encodes as the canonical quiet NaN with
/// sign bit 0.
pub fn encode_real(value: &RealValue, mode: RoundingMode) -> Float64Bits {
    let (sign, magnitude) = match value {
        RealValue::NaN => {
            return Float64Bits::from_fields(
                Sign::Positive,
                EXPONENT_FIELD_MAX,
                CANONICAL_NAN_FRACTION,
            );
        }
        RealValue::Infinite { sign } => {
            return Float64Bits::from_fields(*sign, EXPONENT_FIELD_MAX, 0);
        }
        RealValue::Finite { sign, magnitude } => (*sign, magnitude),
    };

    if *magnitude == Rational::ZERO {
        return Float64Bits::from_fields(sign, 0, 0);
    }

    let (significand, exponent) = normalize(magnitude);
    let biased = exponent + EXPONENT_BIAS;

    if biased >= i64::from(EXPONENT_FIELD_MAX) {
        // Overflow: saturate to signed infinity.
        return Float64Bits::from_fields(sign, EXPONENT_FIELD_MAX, 0);
    }

    if biased <= 0 {
        return encode_subnormal(sign, magnitude, mode);
    }

    // Normal range: the implicit leading 1 is dropped and the remaining
    // fractional part supplies the stored bits.
    let (fraction, guard) = fraction_bits(significand - Rational::ONE);
    match apply_rounding(fraction, guard, mode) {
        Rounded::Fraction(fraction) => Float64Bits::from_fields(sign, biased as u32, fraction),
        Rounded::CarryOut => {
            let bumped = biased + 1;
            if bumped >= i64::from(EXPONENT_FIELD_MAX) {
                // Rounding carried past the top normal exponent.
                Float64Bits::from_fields(sign, EXPONENT_FIELD_MAX, 0)
            } else {
                Float64Bits::from_fields(sign, bumped as u32, 0)
            }
        }
    }
}

/// Encode a magnitude below the normal range (stored exponent field 0).
///
/// The significand has no implicit leading 1 and a fixed true exponent of
/// -1022, so the stored bits are the binary expansion of
/// `magnitude × 2^1022`, which lies in (0, 1). The same 53-bit-guard
/// rounding scheme applies; a fraction increment that carries out has
/// reached the smallest normal value.
fn encode_subnormal(sign: Sign, magnitude: &Rational, mode: RoundingMode) -> Float64Bits {
    let shifted = magnitude * pow2(-SUBNORMAL_EXPONENT);
    let (fraction, guard) = fraction_bits(shifted);
    match apply_rounding(fraction, guard, mode) {
        Rounded::Fraction(fraction) => Float64Bits::from_fields(sign, 0, fraction),
        Rounded::CarryOut => Float64Bits::from_fields(sign, 1, 0),
    }
}

/// Result of applying a rounding discipline to 52 bits plus a guard.
enum Rounded {
    /// The final 52-bit fraction field.
    Fraction(u64),
    /// The increment overflowed all 52 bits; the exponent must absorb it.
    CarryOut,
}

fn apply_rounding(fraction: u64, guard: bool, mode: RoundingMode) -> Rounded {
    match mode {
        RoundingMode::Chop => Rounded::Fraction(fraction),
        RoundingMode::RoundHalfToEven => {
            if !guard {
                return Rounded::Fraction(fraction);
            }
            let incremented = fraction + 1;
            if incremented == FRACTION_OVERFLOW {
                Rounded::CarryOut
            } else {
                Rounded::Fraction(incremented)
            }
        }
    }
}

/// Extract 52 stored bits plus one guard bit from a fractional value.
///
/// `fractional` must satisfy `0 <= fractional < 1`. Each step doubles the
/// remaining value exactly; the integer part is the next bit.
fn fraction_bits(mut fractional: Rational) -> (u64, bool) {
    let mut bits: u64 = 0;
    for _ in 0..FRACTION_BITS {
        fractional *= Rational::TWO;
        bits <<= 1;
        if fractional >= Rational::ONE {
            bits |= 1;
            fractional -= Rational::ONE;
        }
    }
    fractional *= Rational::TWO;
    (bits, fractional >= Rational::ONE)
}
