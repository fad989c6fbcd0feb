//! High-level, ergonomic library API: convert a raw input string, generate a
//! range of conversions, and emit rendered lines to the terminal or a file.
//! Prefer these entrypoints over the low-level `core` modules when embedding.
use tracing::debug;

use crate::core::arabic::{self, validate};
use crate::core::classify::classify;
use crate::core::format::format_value;
use crate::core::params::{ConversionParams, OutputTarget};
use crate::core::range::RangeLines;
use crate::core::roman::{to_arabic, to_roman};
use crate::error::{Error, Result};
use crate::io::{print_lines, write_lines};
use crate::types::{Direction, NotationMode, Numeral, NumeralKind};

/// Result of a single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub arabic: Numeral,
    pub roman: String,
    pub direction: Direction,
    /// Whether additive notation produced `roman`; only set for Arabic input
    pub additive: bool,
}

impl Conversion {
    /// Render as a display line. Only `params.simple` is consulted; the notation
    /// used is the one recorded at conversion time.
    pub fn render(&self, params: &ConversionParams) -> String {
        let target = match self.direction {
            Direction::ArabicToRoman => NumeralKind::Roman,
            Direction::RomanToArabic => NumeralKind::Arabic,
        };
        let effective = ConversionParams {
            notation: if self.additive {
                NotationMode::Additive
            } else {
                NotationMode::Subtractive
            },
            simple: params.simple,
        };
        format_value(u64::from(self.arabic.get()), &self.roman, target, &effective)
    }
}

/// Convert an Arabic or Roman numeral string.
///
/// Input is uppercased before classification, so "mcmlxv" is accepted.
/// Roman input decoding to a value outside 1..=4000 fails with `Error::Range`.
pub fn convert(input: &str, params: &ConversionParams) -> Result<Conversion> {
    let normalized = input.to_uppercase();
    let kind = classify(&normalized);
    debug!("Classified {:?} as {}", normalized, kind);

    match kind {
        NumeralKind::Arabic => {
            let arabic = arabic::parse(&normalized)?;
            let roman = to_roman(arabic, params.notation);
            debug!("{} -> {} ({})", arabic, roman, params.notation);
            Ok(Conversion {
                arabic,
                roman,
                direction: Direction::ArabicToRoman,
                additive: params.is_additive(),
            })
        }
        NumeralKind::Roman => {
            let value = to_arabic(&normalized)?;
            // saturated sums above i64::MAX still fail the range check
            let arabic = validate(i64::try_from(value).unwrap_or(i64::MAX))?;
            debug!("{} -> {}", normalized, arabic);
            Ok(Conversion {
                arabic,
                roman: normalized,
                direction: Direction::RomanToArabic,
                additive: false,
            })
        }
        NumeralKind::Undefined => Err(Error::Unclassified { input: normalized }),
    }
}

/// Formatted Arabic to Roman lines for every value in `start..=end`.
///
/// Bounds are validated before anything is generated.
pub fn convert_range(start: i64, end: i64, params: &ConversionParams) -> Result<RangeLines> {
    RangeLines::new(start, end, *params)
}

/// Send rendered lines to `target`.
pub fn emit<I, S>(lines: I, target: &OutputTarget) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match target {
        OutputTarget::Terminal => print_lines(lines),
        OutputTarget::File { path, mode } => write_lines(path, lines, *mode).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_arabic() {
        let c = convert("1965", &ConversionParams::default()).unwrap();
        assert_eq!(c.roman, "MCMLXV");
        assert_eq!(c.direction, Direction::ArabicToRoman);
        assert_eq!(c.render(&ConversionParams::default()), "1965 = MCMLXV");
    }

    #[test]
    fn test_convert_lowercase_roman() {
        let c = convert("mcmlxv", &ConversionParams::default()).unwrap();
        assert_eq!(c.arabic.get(), 1965);
        assert_eq!(c.render(&ConversionParams::default()), "MCMLXV = 1965");
    }

    #[test]
    fn test_roman_input_ignores_additive_suffix() {
        let params = ConversionParams {
            notation: NotationMode::Additive,
            simple: false,
        };
        let c = convert("MDCCCCLXV", &params).unwrap();
        assert_eq!(c.render(&params), "MDCCCCLXV = 1965");
    }

    #[test]
    fn test_convert_errors() {
        let params = ConversionParams::default();
        assert!(matches!(convert("4001", &params), Err(Error::Range { value: 4001 })));
        assert!(matches!(convert("MMMMM", &params), Err(Error::Range { value: 5000 })));
        assert!(matches!(convert("abc123", &params), Err(Error::Unclassified { .. })));
        assert!(matches!(convert("", &params), Err(Error::Unclassified { .. })));
    }
}
