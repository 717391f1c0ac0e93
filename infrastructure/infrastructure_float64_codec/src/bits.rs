//! Bit-String Representation and Field Classification
//!
//! Provides [`Float64Bits`], the 64-character `{0,1}` string that is the
//! codec's exchange format, together with field accessors and the IEEE 754
//! classification of a bit pattern.

use entities_real_value::Sign;

use crate::constants::{EXPONENT_BITS, EXPONENT_FIELD_MAX, FRACTION_BITS, TOTAL_BITS};

/// Decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not a 64-character string over {'0','1'}.
    InvalidEncoding(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidEncoding(reason) => {
                write!(f, "invalid binary64 encoding: {}", reason)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// IEEE 754 classification of a bit pattern, derived from the exponent and
/// fraction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Exponent field all-zero, fraction zero.
    Zero,
    /// Exponent field all-zero, fraction nonzero.
    Subnormal,
    /// Exponent field strictly between 0 and 2047.
    Normal,
    /// Exponent field all-ones, fraction zero.
    Infinity,
    /// Exponent field all-ones, fraction nonzero.
    NaN,
}

impl Classification {
    /// Classify a pattern from its raw exponent and fraction fields.
    pub fn from_fields(exponent: u32, fraction: u64) -> Self {
        if exponent == 0 {
            if fraction == 0 {
                Classification::Zero
            } else {
                Classification::Subnormal
            }
        } else if exponent == EXPONENT_FIELD_MAX {
            if fraction == 0 {
                Classification::Infinity
            } else {
                Classification::NaN
            }
        } else {
            Classification::Normal
        }
    }
}

/// An exactly-64-character sequence over {'0','1'}, partitioned positionally
/// as `[sign:1][biased_exponent:11][fraction:52]`.
///
/// Length and alphabet are the only structural invariants; every bit pattern
/// is a valid `Float64Bits`, including the reserved patterns for zero,
/// subnormals, infinities, and NaN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Float64Bits {
    bits: String,
}

impl Float64Bits {
    /// Validate and wrap a candidate bit string.
    ///
    /// # Arguments
    /// * `text` - The candidate 64-character binary string
    ///
    /// # Returns
    /// * `Ok(Float64Bits)` - The validated bit string
    /// * `Err(DecodeError)` - Wrong length or a non-binary character
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        if text.len() != TOTAL_BITS {
            return Err(DecodeError::InvalidEncoding(format!(
                "expected {} bits, got {}",
                TOTAL_BITS,
                text.len()
            )));
        }
        if let Some(bad) = text.chars().find(|c| *c != '0' && *c != '1') {
            return Err(DecodeError::InvalidEncoding(format!(
                "non-binary character {:?}",
                bad
            )));
        }
        Ok(Self {
            bits: text.to_string(),
        })
    }

    /// Assemble a bit string from its three fields.
    ///
    /// Used by the encoder, which always produces in-range fields.
    pub(crate) fn from_fields(sign: Sign, exponent: u32, fraction: u64) -> Self {
        debug_assert!(exponent <= EXPONENT_FIELD_MAX);
        debug_assert!(fraction < 1 << FRACTION_BITS);
        let sign_bit = if sign.is_negative() { '1' } else { '0' };
        Self {
            bits: format!(
                "{}{:0width_e$b}{:0width_f$b}",
                sign_bit,
                exponent,
                fraction,
                width_e = EXPONENT_BITS,
                width_f = FRACTION_BITS
            ),
        }
    }

    /// The sign encoded in bit 0.
    pub fn sign(&self) -> Sign {
        if self.bits.as_bytes()[0] == b'1' {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The 11-bit biased exponent field as an unsigned integer.
    pub fn exponent_field(&self) -> u32 {
        self.bits.as_bytes()[1..1 + EXPONENT_BITS]
            .iter()
            .fold(0u32, |acc, b| (acc << 1) | u32::from(b - b'0'))
    }

    /// The 52-bit fraction field as an unsigned integer.
    pub fn fraction_field(&self) -> u64 {
        self.bits.as_bytes()[1 + EXPONENT_BITS..]
            .iter()
            .fold(0u64, |acc, b| (acc << 1) | u64::from(b - b'0'))
    }

    /// Classify this bit pattern.
    pub fn classify(&self) -> Classification {
        Classification::from_fields(self.exponent_field(), self.fraction_field())
    }

    /// The raw 64-character string.
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// The sign bit as a `&str` slice.
    pub fn sign_str(&self) -> &str {
        &self.bits[..1]
    }

    /// The exponent field as a `&str` slice.
    pub fn exponent_str(&self) -> &str {
        &self.bits[1..1 + EXPONENT_BITS]
    }

    /// The fraction field as a `&str` slice.
    pub fn fraction_str(&self) -> &str {
        &self.bits[1 + EXPONENT_BITS..]
    }
}

impl std::fmt::Display for Float64Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let bits = Float64Bits::parse(&"0".repeat(64)).unwrap();
        assert_eq!(bits.classify(), Classification::Zero);
        assert_eq!(bits.sign(), Sign::Positive);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(Float64Bits::parse(&"0".repeat(63)).is_err());
        assert!(Float64Bits::parse(&"0".repeat(65)).is_err());
        assert!(Float64Bits::parse("").is_err());
    }

    #[test]
    fn test_parse_bad_character() {
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "2");
        let err = Float64Bits::parse(&text).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding(_)));
    }

    #[test]
    fn test_field_extraction() {
        // -1.5: sign 1, exponent 1023, fraction 100...0
        let text = format!("1{:011b}{}{}", 1023, "1", "0".repeat(51));
        let bits = Float64Bits::parse(&text).unwrap();
        assert_eq!(bits.sign(), Sign::Negative);
        assert_eq!(bits.exponent_field(), 1023);
        assert_eq!(bits.fraction_field(), 1 << 51);
        assert_eq!(bits.classify(), Classification::Normal);
    }

    #[test]
    fn test_from_fields_round_trips_accessors() {
        let bits = Float64Bits::from_fields(Sign::Negative, 2046, (1 << 52) - 1);
        assert_eq!(bits.sign(), Sign::Negative);
        assert_eq!(bits.exponent_field(), 2046);
        assert_eq!(bits.fraction_field(), (1 << 52) - 1);
        assert_eq!(bits.as_str().len(), 64);
    }

    #[test]
    fn test_classification_rules() {
        assert_eq!(Classification::from_fields(0, 0), Classification::Zero);
        assert_eq!(Classification::from_fields(0, 1), Classification::Subnormal);
        assert_eq!(Classification::from_fields(1, 0), Classification::Normal);
        assert_eq!(Classification::from_fields(2046, 7), Classification::Normal);
        assert_eq!(Classification::from_fields(2047, 0), Classification::Infinity);
        assert_eq!(Classification::from_fields(2047, 1), Classification::NaN);
    }

    #[test]
    fn test_field_slices() {
        let bits = Float64Bits::from_fields(Sign::Positive, 3, 5);
        assert_eq!(bits.sign_str(), "0");
        assert_eq!(bits.exponent_str(), "00000000011");
        assert_eq!(bits.fraction_str().len(), 52);
        assert!(bits.fraction_str().ends_with("101"));
    }
}
