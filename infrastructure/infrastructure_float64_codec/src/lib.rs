//! Infrastructure Layer: binary64 Codec
//!
//! Converts arbitrary-precision real numbers to and from the IEEE 754
//! binary64 bit layout, with two rounding disciplines (chopping and a
//! guard-bit round-to-nearest). This crate is the numeric core: front ends
//! consume exactly two operations, [`encode_real`] and [`decode_real`], and
//! embed none of the normalization or rounding logic themselves.
//!
//! ## Overview
//!
//! The codec is a pure, stateless function pair over the exact
//! [`RealValue`](entities_real_value::RealValue) representation. Encoding
//! reproduces the exact bit pattern a conforming IEEE 754 encoder with the
//! chosen rounding policy would produce, including signed zero, subnormals,
//! overflow to infinity, underflow to zero, infinities, and NaN. Decoding
//! reconstructs the exact rational value a pattern denotes.
//!
//! ## Modules
//!
//! - **[`constants`]**: Field widths and derived bounds of the 64-bit layout
//! - **[`bits`]**: The [`Float64Bits`] string type and field [`Classification`]
//! - **[`rounding`]**: The [`RoundingMode`] disciplines
//! - **[`normalize`]**: Exact rational normalization shared by the encoder paths
//! - **[`encode_real`](mod@encode_real)**: Real-to-bits encoding
//! - **[`decode_real`](mod@decode_real)**: Bits-to-real decoding
//!
//! ## See Also
//!
//! - [`entities_real_value`]: The exact value representation and text parsing

pub mod bits;
pub mod constants;
pub mod decode_real;
pub mod encode_real;
pub mod normalize;
pub mod rounding;

pub use bits::{Classification, DecodeError, Float64Bits};
pub use decode_real::{decode_bits, decode_real};
pub use encode_real::encode_real;
pub use rounding::RoundingMode;
