//! Entities Layer: Exact Real Values
//!
//! Provides the exact arbitrary-precision real value type used by the
//! IEEE 754 binary64 codec:
//! - Signed finite values over arbitrary-precision rationals
//! - Signed zero, signed infinity, and NaN
//! - Exact decimal text parsing
//!
//! This crate uses the `malachite` crate for arbitrary-precision rational
//! arithmetic so that quantization to 53 significand bits is always computed
//! exactly, with no double-rounding through a native binary float
//! intermediate.

pub mod parse;
pub mod real_value;

pub use parse::{parse_real, ParseError};
pub use real_value::{RealValue, Sign};
