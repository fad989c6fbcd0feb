use clap::Parser;
use std::path::PathBuf;

use roman::{ConversionParams, NotationMode, OutputTarget, WriteMode};

const SAMPLE_USAGE: &str = "\
Sample usage:
    $ roman 1965
    $ roman MCMLXV
    $ roman -a 1965
    $ roman MDCCCCLXV
    $ roman --sim -r -s 100 -e 250 -o -p my_values.txt --app";

#[derive(Parser, Debug)]
#[command(
    name = "roman",
    version,
    about = "Roman numeral converter (Arabic to Roman & Roman to Arabic, 1 to 4000)",
    after_help = SAMPLE_USAGE
)]
pub struct CliArgs {
    /// Arabic or Roman numeral to convert (case-insensitive)
    pub value: Option<String>,

    /// Do not use subtractive notation (4 becomes IIII)
    #[arg(short, long, default_value_t = false)]
    pub additive: bool,

    /// Simple output, only the converted value
    #[arg(long = "sim", alias = "simple", default_value_t = false)]
    pub simple: bool,

    /// Produce a range of output from start to end (inclusive)
    #[arg(short, long, default_value_t = false)]
    pub range: bool,

    /// The start value of the range
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// The end value of the range
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub end: i64,

    /// Write output to a local file instead of the terminal
    #[arg(short = 'o', long = "output-file", default_value_t = false)]
    pub output_file: bool,

    /// The file to produce when writing output to a file
    #[arg(short, long, default_value = "out.txt")]
    pub path: PathBuf,

    /// Append to the output file instead of truncating it
    #[arg(long = "app", alias = "append", default_value_t = false)]
    pub append: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn conversion_params(&self) -> ConversionParams {
        ConversionParams {
            notation: if self.additive {
                NotationMode::Additive
            } else {
                NotationMode::Subtractive
            },
            simple: self.simple,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        if !self.output_file {
            return OutputTarget::Terminal;
        }
        OutputTarget::File {
            path: self.path.clone(),
            mode: if self.append {
                WriteMode::Append
            } else {
                WriteMode::Truncate
            },
        }
    }
}
