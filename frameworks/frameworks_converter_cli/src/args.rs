//! Command-Line Argument Parsing Module
//!
//! Provides argument parsing for the converter front end.
//! Uses clap for type-safe argument parsing.

use clap::Parser;

use infrastructure_float64_codec::RoundingMode;

/// binary64 converter command-line arguments
#[derive(Parser, Debug)]
#[command(name = "float64")]
#[command(about = "64-bit IEEE 754 Converter")]
pub struct ConverterArgs {
    /// The value to convert: a real number (decimal text, "inf", or "nan"),
    /// or a 64-bit binary string with --decode
    pub input: String,

    /// Use round-to-nearest instead of chopping
    #[arg(long)]
    pub round: bool,

    /// Encode with both methods and compare their exact errors
    #[arg(long)]
    pub compare: bool,

    /// Decode a 64-bit binary string instead of encoding
    #[arg(long)]
    pub decode: bool,
}

impl ConverterArgs {
    /// The rounding discipline selected on the command line.
    pub fn rounding_mode(&self) -> RoundingMode {
        if self.round {
            RoundingMode::RoundHalfToEven
        } else {
            RoundingMode::Chop
        }
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.decode && self.compare {
            return Err("--decode cannot be combined with --compare".to_string());
        }
        if self.decode && self.round {
            return Err("--decode cannot be combined with --round".to_string());
        }
        Ok(())
    }
}
