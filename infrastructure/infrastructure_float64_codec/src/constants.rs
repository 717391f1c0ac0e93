//! IEEE 754 binary64 Layout Constants
//!
//! Defines the field widths and derived bounds of the 64-bit binary
//! interchange format: `[sign:1][biased_exponent:11][fraction:52]`.

/// Total length of the bit-string representation.
pub const TOTAL_BITS: usize = 64;

/// Width of the biased exponent field.
pub const EXPONENT_BITS: usize = 11;

/// Width of the stored fraction field.
pub const FRACTION_BITS: usize = 52;

/// Bias added to the true exponent to form the stored exponent field.
pub const EXPONENT_BIAS: i64 = 1023;

/// All-ones exponent field, reserved for infinities and NaN.
pub const EXPONENT_FIELD_MAX: u32 = 2047;

/// True exponent of every subnormal value (stored exponent field 0).
pub const SUBNORMAL_EXPONENT: i64 = -1022;

/// One past the largest storable fraction; an increment reaching this value
/// has carried into the implicit bit.
pub const FRACTION_OVERFLOW: u64 = 1 << FRACTION_BITS;

/// Fraction field of the canonical quiet NaN: `1` followed by 51 zeros.
pub const CANONICAL_NAN_FRACTION: u64 = 1 << (FRACTION_BITS - 1);
