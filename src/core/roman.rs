//! Conversion in both directions between Arabic values and Roman strings.
use crate::core::symbols::{self, lookup};
use crate::error::{Error, Result};
use crate::types::{NotationMode, Numeral};

/// Sum the value of a Roman string, scanning left to right.
///
/// At each position a two-symbol pair is tried before a single symbol. The scan
/// is greedy and permissive: non-canonical forms such as "IIII", "VV" or
/// "IIV" are summed chunk by chunk rather than rejected, which is also what
/// lets additive output decode. The result is not range-checked.
pub fn to_arabic(input: &str) -> Result<u64> {
    let bytes = input.as_bytes();
    let mut total: u64 = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(v) = bytes.get(i..i + 2).and_then(lookup) {
            total = total.saturating_add(u64::from(v));
            i += 2;
            continue;
        }
        match lookup(&bytes[i..i + 1]) {
            Some(v) => {
                total = total.saturating_add(u64::from(v));
                i += 1;
            }
            None => {
                return Err(Error::InvalidSymbol {
                    input: input.to_string(),
                });
            }
        }
    }

    Ok(total)
}

/// Render `n` using the symbol table selected by `mode`.
pub fn to_roman(n: Numeral, mode: NotationMode) -> String {
    let mut out = String::new();
    let mut remaining = n.get();

    while remaining > 0 {
        // tables end in I (1), so a match always exists while remaining > 0
        let Some(sym) = symbols::table(mode).find(|s| s.value <= remaining) else {
            break;
        };
        out.push_str(sym.glyph);
        remaining -= sym.value;
    }

    out
}
