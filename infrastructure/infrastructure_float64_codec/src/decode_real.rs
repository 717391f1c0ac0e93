//! Binary64-to-real Decoding
//!
//! Converts a 64-bit pattern back to the exact real value it denotes, as an
//! arbitrary-precision rational rather than a native lossy float, so that
//! error analysis against the original pre-encoding value stays meaningful.
//!
//! The only error case is a malformed input string (wrong length or a
//! non-binary character); every well-formed 64-bit pattern decodes.

use entities_real_value::RealValue;
use malachite::Rational;

use crate::bits::{Classification, DecodeError, Float64Bits};
use crate::constants::{EXPONENT_BIAS, FRACTION_BITS, SUBNORMAL_EXPONENT};
use crate::normalize::pow2;

/// Decode a binary64 bit string into an exact real value.
///
/// # Arguments
/// * `text` - A candidate 64-character string over {'0','1'}
///
/// # Returns
/// * `Ok(RealValue)` - The exact denoted value; zero keeps its sign, every
///   NaN pattern collapses to the unsigned NaN marker
/// * `Err(DecodeError)` - The input is not a 64-character binary string
pub fn decode_real(text: &str) -> Result<RealValue, DecodeError> {
    let bits = Float64Bits::parse(text)?;
    Ok(decode_bits(&bits))
}

/// Decode an already-validated bit string. Total.
pub fn decode_bits(bits: &Float64Bits) -> RealValue {
    let sign = bits.sign();
    let exponent = bits.exponent_field();
    let fraction = bits.fraction_field();

    match Classification::from_fields(exponent, fraction) {
        Classification::Zero => RealValue::zero(sign),
        Classification::Infinity => RealValue::infinity(sign),
        Classification::NaN => RealValue::nan(),
        Classification::Subnormal => {
            // No implicit bit; fixed true exponent of -1022.
            let magnitude = Rational::from(fraction)
                * pow2(SUBNORMAL_EXPONENT - FRACTION_BITS as i64);
            RealValue::Finite { sign, magnitude }
        }
        Classification::Normal => {
            // (1 + fraction/2^52) * 2^(exponent - 1023)
            let significand = Rational::from((1u64 << FRACTION_BITS) | fraction);
            let magnitude = significand
                * pow2(i64::from(exponent) - EXPONENT_BIAS - FRACTION_BITS as i64);
            RealValue::Finite { sign, magnitude }
        }
    }
}
