//! Exact Decimal Text Parsing
//!
//! Parses free-form numeric text into an exact [`RealValue`] without ever
//! routing the value through a native float. Accepted forms:
//!
//! - decimal literals: `12.375`, `-0.5`, `.25`, `20.`, `0`
//! - scientific notation: `1.5e10`, `-3E-7`
//! - special keywords (case-insensitive): `inf`, `infinity`, `nan`,
//!   optionally signed
//!
//! This is the complete input grammar. There is deliberately no expression
//! evaluation here: front ends hand this module a single numeric literal and
//! nothing else.

use std::str::FromStr;

use malachite::base::num::basic::traits::Zero;
use malachite::{Integer, Rational};

use crate::real_value::{pow10, RealValue, Sign};

/// Largest decimal exponent magnitude accepted by the parser.
///
/// binary64 saturates to infinity above ~1e309 and flushes to zero below
/// ~1e-324, so this bound rejects nothing with a distinct encoding while
/// keeping the exact scaling loop bounded.
const MAX_DECIMAL_EXPONENT: i64 = 5000;

/// Numeric text parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not a recognizable numeric literal.
    UnparsableNumber(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnparsableNumber(text) => {
                write!(f, "not a valid number: {:?}", text)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse exact decimal text into a [`RealValue`].
///
/// # Arguments
/// * `text` - The numeric literal to parse
///
/// # Returns
/// * `Ok(RealValue)` - The exact parsed value
/// * `Err(ParseError)` - The text is not a numeric literal
///
/// # Examples
///
/// ```rust
/// use entities_real_value::{parse_real, Sign};
///
/// let v = parse_real("-12.375").unwrap();
/// assert_eq!(v.sign(), Sign::Negative);
///
/// assert!(parse_real("nan").unwrap().is_nan());
/// assert!(parse_real("twelve").is_err());
/// ```
pub fn parse_real(text: &str) -> Result<RealValue, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnparsableNumber(text.to_string()));
    }

    let (sign, rest) = match trimmed.as_bytes()[0] {
        b'+' => (Sign::Positive, &trimmed[1..]),
        b'-' => (Sign::Negative, &trimmed[1..]),
        _ => (Sign::Positive, trimmed),
    };
    if rest.is_empty() {
        return Err(ParseError::UnparsableNumber(text.to_string()));
    }

    let lowered = rest.to_ascii_lowercase();
    match lowered.as_str() {
        "inf" | "infinity" => return Ok(RealValue::infinity(sign)),
        // NaN is unsigned; any sign prefix is ignored.
        "nan" => return Ok(RealValue::nan()),
        _ => {}
    }

    let (mantissa_text, exponent) = split_exponent(rest, text)?;
    let (digits, scale) = collect_digits(mantissa_text, text)?;

    let unscaled = Integer::from_str(&digits)
        .map_err(|_| ParseError::UnparsableNumber(text.to_string()))?;

    // magnitude = digits * 10^(exponent - scale), computed exactly. The
    // subtraction itself can overflow i64 for extreme exponents; that is
    // just another unparsable input.
    let net_exponent = exponent
        .checked_sub(scale)
        .ok_or_else(|| ParseError::UnparsableNumber(text.to_string()))?;
    if net_exponent.unsigned_abs() > MAX_DECIMAL_EXPONENT as u64 {
        return Err(ParseError::UnparsableNumber(text.to_string()));
    }
    let mut magnitude = Rational::from(unscaled);
    if net_exponent >= 0 {
        magnitude *= pow10(net_exponent as u64);
    } else {
        magnitude /= pow10(net_exponent.unsigned_abs());
    }

    if magnitude == Rational::ZERO {
        // Preserve the written sign: "-0.0" is negative zero.
        return Ok(RealValue::zero(sign));
    }
    Ok(RealValue::Finite { sign, magnitude })
}

/// Split `12.34e-5` into the mantissa text and its decimal exponent.
fn split_exponent<'a>(rest: &'a str, original: &str) -> Result<(&'a str, i64), ParseError> {
    match rest.find(['e', 'E']) {
        None => Ok((rest, 0)),
        Some(position) => {
            let mantissa = &rest[..position];
            let exponent_text = &rest[position + 1..];
            let exponent = i64::from_str(exponent_text)
                .map_err(|_| ParseError::UnparsableNumber(original.to_string()))?;
            Ok((mantissa, exponent))
        }
    }
}

/// Collect the mantissa digits with the decimal point removed.
///
/// Returns the digit string and the number of fractional digits (the scale).
/// At least one digit must appear on one side of the point.
fn collect_digits(mantissa: &str, original: &str) -> Result<(String, i64), ParseError> {
    let mut digits = String::with_capacity(mantissa.len());
    let mut scale: i64 = 0;
    let mut seen_point = false;
    let mut seen_digit = false;

    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => {
                digits.push(ch);
                seen_digit = true;
                if seen_point {
                    scale += 1;
                }
            }
            '.' if !seen_point => seen_point = true,
            _ => return Err(ParseError::UnparsableNumber(original.to_string())),
        }
    }

    if !seen_digit {
        return Err(ParseError::UnparsableNumber(original.to_string()));
    }
    Ok((digits, scale))
}
