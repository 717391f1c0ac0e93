//! binary64 Converter Binary Entry Point
//!
//! A thin command-line front end over the codec crate. It parses one
//! numeric literal (or one bit string with --decode), calls the codec's two
//! operations, and prints the result. All numeric logic lives in
//! `infrastructure_float64_codec`; this binary only translates errors into
//! display strings and exit codes.
//!
//! Input is restricted to numeric literals plus the "inf"/"nan" keywords.
//! There is deliberately no expression evaluation of any kind.

use std::process;

use clap::Parser;

use frameworks_converter_cli::args::ConverterArgs;
use frameworks_converter_cli::display::{report_comparison, report_conversion};
use entities_real_value::parse_real;
use infrastructure_float64_codec::{decode_real, encode_real};

fn main() {
    let args = ConverterArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if args.decode {
        match decode_real(&args.input) {
            Ok(value) => {
                println!("Decoded: {}", value.to_decimal_string(60));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let value = match parse_real(&args.input) {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid input! Please enter a valid number.");
            process::exit(1);
        }
    };

    if args.compare {
        report_comparison(&value);
    } else {
        let bits = encode_real(&value, args.rounding_mode());
        report_conversion(&value, &bits);
    }
}
