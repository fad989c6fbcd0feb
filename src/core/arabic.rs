//! Arabic numeral parsing and bounds validation.
use crate::error::{Error, Result};
use crate::types::{MAX_ARABIC, MIN_ARABIC, Numeral};

/// Accept `value` only if it lies in `MIN_ARABIC..=MAX_ARABIC`.
pub fn validate(value: i64) -> Result<Numeral> {
    if value < i64::from(MIN_ARABIC) || value > i64::from(MAX_ARABIC) {
        return Err(Error::Range { value });
    }
    // bounds checked above, fits in u16
    Ok(Numeral(value as u16))
}

/// Parse a base-10 integer and validate its range.
pub fn parse(input: &str) -> Result<Numeral> {
    let value = input.parse::<i64>().map_err(|_| Error::Format {
        input: input.to_string(),
    })?;
    validate(value)
}
