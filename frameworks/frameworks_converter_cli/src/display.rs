//! Result Display Module
//!
//! Formats conversion results for the terminal: the bit-field components of
//! a 64-bit pattern, the recovered exact value, and the side-by-side
//! comparison of the two rounding methods.

use entities_real_value::RealValue;
use infrastructure_float64_codec::{decode_bits, encode_real, Float64Bits, RoundingMode};

/// Fractional digits shown before an exact decimal expansion is truncated.
const DISPLAY_DIGITS: usize = 60;

/// Print the sign, exponent, and fraction fields of a bit string.
pub fn display_components(bits: &Float64Bits) {
    println!("Sign Bit:    {}", bits.sign_str());
    println!("11 Bits:     {}", bits.exponent_str());
    println!("52 Bits:     {}", bits.fraction_str());
    println!("Full 64-Bit Binary: {}", bits);
}

/// Print a single conversion: input value, components, recovered value.
pub fn report_conversion(value: &RealValue, bits: &Float64Bits) {
    println!("Original:  {}", value.to_decimal_string(DISPLAY_DIGITS));
    display_components(bits);
    let recovered = decode_bits(bits);
    println!("Recovered: {}", recovered.to_decimal_string(DISPLAY_DIGITS));
}

/// Print both methods side by side with their exact errors.
pub fn report_comparison(value: &RealValue) {
    let chopped = encode_real(value, RoundingMode::Chop);
    let rounded = encode_real(value, RoundingMode::RoundHalfToEven);

    println!("Value:    {}", value.to_decimal_string(DISPLAY_DIGITS));
    println!("Chopping: {}", chopped);
    println!("Rounding: {}", rounded);
    println!("Same result? {}", chopped == rounded);

    if value.is_finite() && !value.is_zero() {
        report_error("chopping", &decode_bits(&chopped), value);
        report_error("rounding", &decode_bits(&rounded), value);
    }
}

fn report_error(method: &str, recovered: &RealValue, value: &RealValue) {
    // Errors are computed exactly, then approximated only for display.
    let absolute = recovered
        .abs_error(value)
        .map(RealValue::from_rational)
        .map(|e| e.to_f64());
    let relative = recovered
        .relative_error_vs(value)
        .map(RealValue::from_rational)
        .map(|e| e.to_f64());
    match (absolute, relative) {
        (Some(absolute), Some(relative)) => {
            println!("Error ({}): absolute {:e}, relative {:e}", method, absolute, relative);
        }
        (Some(absolute), None) => {
            println!("Error ({}): absolute {:e}", method, absolute);
        }
        _ => {}
    }
}
