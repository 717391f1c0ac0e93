//! Integration tests for infrastructure_float64_codec crate
//!
//! These tests verify the encode/decode pair end to end: exact round trips
//! for representable values, chopping vs rounding behavior, relative error
//! bounds, special-value fixed points, saturation, and decode rejection.

use entities_real_value::{parse_real, RealValue, Sign};
use infrastructure_float64_codec::normalize::pow2;
use infrastructure_float64_codec::*;

fn encode_text(text: &str, mode: RoundingMode) -> Float64Bits {
    encode_real(&parse_real(text).unwrap(), mode)
}

#[test]
fn test_round_trip_exact_for_representable_values() {
    let exact_inputs = ["0.5", "1.0", "2.0", "4.0", "20.0", "-20.0", "12.375", "0.15625"];
    for text in exact_inputs {
        let value = parse_real(text).unwrap();
        for mode in [RoundingMode::Chop, RoundingMode::RoundHalfToEven] {
            let bits = encode_real(&value, mode);
            let recovered = decode_bits(&bits);
            assert_eq!(recovered, value, "round trip changed {} under {:?}", text, mode);
        }
    }
}

#[test]
fn test_chop_and_round_diverge_on_inexact_values() {
    let mut diverged = false;
    for text in ["0.1", "12345.6789"] {
        let chopped = encode_text(text, RoundingMode::Chop);
        let rounded = encode_text(text, RoundingMode::RoundHalfToEven);
        if chopped != rounded {
            diverged = true;
        }
    }
    assert!(diverged, "chopping and rounding never disagreed");
}

#[test]
fn test_rounded_error_never_exceeds_chopped_error() {
    for text in ["0.1", "12345.6789", "0.333333333333333", "2.718281828459045235"] {
        let value = parse_real(text).unwrap();
        let chopped = decode_bits(&encode_real(&value, RoundingMode::Chop));
        let rounded = decode_bits(&encode_real(&value, RoundingMode::RoundHalfToEven));
        let chop_error = chopped.abs_error(&value).unwrap();
        let round_error = rounded.abs_error(&value).unwrap();
        assert!(
            round_error <= chop_error,
            "rounding lost to chopping on {}",
            text
        );
    }
}

#[test]
fn test_relative_error_bounds() {
    let inputs = [
        "0.1",
        "-0.1",
        "12345.6789",
        "1.0",
        "3.14159265358979323846",
        "-2.718281828459045",
        "1e300",
        "-7e-300",
        "0.000123456789123456789",
    ];
    for text in inputs {
        let value = parse_real(text).unwrap();

        let chopped = decode_bits(&encode_real(&value, RoundingMode::Chop));
        let chop_relative = chopped.relative_error_vs(&value).unwrap();
        assert!(chop_relative <= pow2(-52), "chop bound violated for {}", text);

        let rounded = decode_bits(&encode_real(&value, RoundingMode::RoundHalfToEven));
        let round_relative = rounded.relative_error_vs(&value).unwrap();
        assert!(round_relative <= pow2(-53), "round bound violated for {}", text);
    }
}

#[test]
fn test_special_value_fixed_points() {
    let all_zeros = "0".repeat(64);
    let pos_inf = format!("0{}{}", "1".repeat(11), "0".repeat(52));
    let neg_inf = format!("1{}{}", "1".repeat(11), "0".repeat(52));

    for mode in [RoundingMode::Chop, RoundingMode::RoundHalfToEven] {
        assert_eq!(
            encode_real(&RealValue::zero(Sign::Positive), mode).as_str(),
            all_zeros
        );
        assert_eq!(
            encode_real(&RealValue::infinity(Sign::Positive), mode).as_str(),
            pos_inf
        );
        assert_eq!(
            encode_real(&RealValue::infinity(Sign::Negative), mode).as_str(),
            neg_inf
        );
        assert!(decode_bits(&encode_real(&RealValue::nan(), mode)).is_nan());
    }

    assert_eq!(
        decode_real(&pos_inf).unwrap(),
        RealValue::infinity(Sign::Positive)
    );
    assert_eq!(
        decode_real(&neg_inf).unwrap(),
        RealValue::infinity(Sign::Negative)
    );
}

#[test]
fn test_signed_zero_round_trip() {
    for mode in [RoundingMode::Chop, RoundingMode::RoundHalfToEven] {
        let bits = encode_real(&RealValue::zero(Sign::Negative), mode);
        assert_eq!(bits.as_str(), format!("1{}", "0".repeat(63)));
        let recovered = decode_bits(&bits);
        assert!(recovered.is_zero());
        assert_eq!(recovered.sign(), Sign::Negative);
    }
}

#[test]
fn test_overflow_saturates_to_signed_infinity() {
    for mode in [RoundingMode::Chop, RoundingMode::RoundHalfToEven] {
        assert_eq!(
            decode_bits(&encode_text("1e400", mode)),
            RealValue::infinity(Sign::Positive)
        );
        assert_eq!(
            decode_bits(&encode_text("-1e400", mode)),
            RealValue::infinity(Sign::Negative)
        );
    }
}

#[test]
fn test_decode_totality_on_valid_strings() {
    // A spread of arbitrary patterns: decoding any 64-length binary string
    // succeeds.
    let patterns = [
        "0".repeat(64),
        "1".repeat(64),
        "01".repeat(32),
        "10".repeat(32),
        format!("0{}{}", "0".repeat(11), "1".repeat(52)),
        format!("1{:011b}{:052b}", 1234u32, 0x000F_FFFF_FFFF_FFFFu64),
    ];
    for pattern in patterns {
        assert!(decode_real(&pattern).is_ok(), "rejected {}", pattern);
    }
}

#[test]
fn test_decode_rejects_malformed_input() {
    let too_short = "0".repeat(63);
    let too_long = "0".repeat(65);
    let bad_char = format!("{}x", "0".repeat(63));
    for input in [too_short.as_str(), too_long.as_str(), bad_char.as_str()] {
        let result = decode_real(input);
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }
}

#[test]
fn test_concrete_scenario_12_375() {
    // 12.375 = 1100.011 in binary, exactly representable: both modes agree
    // and the round trip is exact.
    let chopped = encode_text("12.375", RoundingMode::Chop);
    let rounded = encode_text("12.375", RoundingMode::RoundHalfToEven);
    assert_eq!(chopped, rounded);
    assert_eq!(
        decode_bits(&chopped),
        parse_real("12.375").unwrap()
    );
}

#[test]
fn test_concrete_scenario_0_15625() {
    let bits = encode_text("0.15625", RoundingMode::RoundHalfToEven);
    assert_eq!(decode_bits(&bits), parse_real("0.15625").unwrap());
}

#[test]
fn test_subnormal_round_trips_exactly() {
    // Exactly-representable subnormals survive both modes untouched.
    let values = [
        RealValue::from_rational(pow2(-1074)),
        RealValue::from_rational(pow2(-1074) * malachite::Rational::from(12345u32)),
        RealValue::from_rational(pow2(-1022) - pow2(-1074)),
    ];
    for value in values {
        for mode in [RoundingMode::Chop, RoundingMode::RoundHalfToEven] {
            let recovered = decode_bits(&encode_real(&value, mode));
            assert_eq!(recovered, value);
        }
    }
}

#[test]
fn test_encoding_agrees_with_hardware_nearest_for_non_ties() {
    // None of these sit exactly halfway between doubles, so the guard-bit
    // scheme matches hardware round-to-nearest-even bit for bit.
    for x in [0.1f64, 12345.6789, 3.2e-320, 1.0 / 3.0, 9.87e250] {
        let value = parse_real(&format!("{:e}", x)).unwrap();
        let rounded = encode_real(&value, RoundingMode::RoundHalfToEven);
        assert_eq!(
            rounded.as_str(),
            format!("{:064b}", x.to_bits()),
            "mismatch for {}",
            x
        );
    }
}
