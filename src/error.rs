//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers numeral parsing, range validation, Roman decoding and classification
//! failures, plus I/O errors raised while writing output files.
use thiserror::Error;

use crate::types::{MAX_ARABIC, MIN_ARABIC};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{input} cannot be converted to an integer")]
    Format { input: String },

    #[error("{value} is {}", bound_violation(.value))]
    Range { value: i64 },

    #[error("{input} contains a symbol that is not a Roman numeral")]
    InvalidSymbol { input: String },

    #[error("{input:?} is neither an Arabic nor a Roman numeral")]
    Unclassified { input: String },

    #[error("range start {start} is greater than range end {end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn bound_violation(value: &i64) -> String {
    if *value > i64::from(MAX_ARABIC) {
        format!("greater than {MAX_ARABIC}")
    } else {
        format!("less than {MIN_ARABIC}")
    }
}
