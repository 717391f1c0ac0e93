//! Frameworks Layer: Converter Command-Line Front End
//!
//! Provides the argument parsing and result display for the `float64`
//! binary. All numeric logic lives in `infrastructure_float64_codec`; this
//! crate only selects between the codec's two operations and formats their
//! results for the terminal.
//!
//! ## Modules
//!
//! - **[`args`]**: clap-based command-line argument parsing
//! - **[`display`]**: bit-field component and comparison reports
//!
//! ## See Also
//!
//! - [`infrastructure_float64_codec`]: The encode/decode pair this front
//!   end consumes
//! - [`entities_real_value`]: Numeric text parsing and exact values

pub mod args;
pub mod display;

pub use args::ConverterArgs;
