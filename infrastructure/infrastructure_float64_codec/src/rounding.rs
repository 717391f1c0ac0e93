//! Rounding Disciplines
//!
//! The two quantization policies the encoder supports.

/// How the encoder disposes of significand bits beyond the 52 stored bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Truncate toward zero after 52 fraction bits.
    Chop,
    /// Round to nearest using a single guard bit.
    ///
    /// Only the 53rd bit is examined: any value at or above the halfway
    /// point rounds up. Exact ties therefore always round up rather than to
    /// the even candidate, and no sticky bit is tracked. For every value
    /// that is not an exact tie this agrees with hardware
    /// round-to-nearest-even.
    RoundHalfToEven,
}
