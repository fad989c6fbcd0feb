use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::NumeralKind;

static ARABIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());
static ROMAN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLCDM]+$").unwrap());

/// Decide whether `input` is shaped like an Arabic numeral, a Roman numeral, or neither.
///
/// Only the character set is checked; "IIII" and "VV" classify as Roman.
/// Case matters, callers uppercase first.
pub fn classify(input: &str) -> NumeralKind {
    if ARABIC_PATTERN.is_match(input) {
        NumeralKind::Arabic
    } else if ROMAN_PATTERN.is_match(input) {
        NumeralKind::Roman
    } else {
        NumeralKind::Undefined
    }
}
