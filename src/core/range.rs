//! Lazy generation of formatted Arabic to Roman lines over an inclusive range.
use std::ops::RangeInclusive;

use tracing::debug;

use crate::core::arabic::validate;
use crate::core::format::format_value;
use crate::core::params::ConversionParams;
use crate::core::roman::to_roman;
use crate::error::{Error, Result};
use crate::types::{Numeral, NumeralKind};

/// Iterator over the formatted lines of `start..=end`, ascending.
#[derive(Debug, Clone)]
pub struct RangeLines {
    values: RangeInclusive<u16>,
    params: ConversionParams,
}

impl RangeLines {
    /// Both bounds must be valid numerals and `start <= end`; the checks happen
    /// here so iteration itself cannot fail.
    pub fn new(start: i64, end: i64, params: ConversionParams) -> Result<Self> {
        let first = validate(start)?;
        let last = validate(end)?;
        if first > last {
            return Err(Error::InvalidRange { start, end });
        }
        debug!("Generating range {} to {}", first, last);
        Ok(Self {
            values: first.get()..=last.get(),
            params,
        })
    }

    fn render(&self, value: u16) -> String {
        let n = Numeral(value);
        format_value(
            u64::from(value),
            &to_roman(n, self.params.notation),
            NumeralKind::Roman,
            &self.params,
        )
    }
}

impl Iterator for RangeLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let value = self.values.next()?;
        Some(self.render(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for RangeLines {}
