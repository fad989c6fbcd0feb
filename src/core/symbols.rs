//! The classical 13-entry Roman symbol table and its additive-only variant.
use crate::types::NotationMode;

/// A single row of the symbol table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Symbol {
    pub value: u16,
    pub glyph: &'static str,
}

const fn sym(value: u16, glyph: &'static str) -> Symbol {
    Symbol { value, glyph }
}

/// Ordered by descending value; conversion relies on this order.
pub const SUBTRACTIVE: [Symbol; 13] = [
    sym(1000, "M"),
    sym(900, "CM"),
    sym(500, "D"),
    sym(400, "CD"),
    sym(100, "C"),
    sym(90, "XC"),
    sym(50, "L"),
    sym(40, "XL"),
    sym(10, "X"),
    sym(9, "IX"),
    sym(5, "V"),
    sym(4, "IV"),
    sym(1, "I"),
];

impl Symbol {
    pub fn is_pair(&self) -> bool {
        self.glyph.len() == 2
    }
}

/// Entries available in `mode`, largest first.
///
/// The additive table is the subtractive one with every two-symbol pair removed.
pub fn table(mode: NotationMode) -> impl Iterator<Item = &'static Symbol> {
    SUBTRACTIVE
        .iter()
        .filter(move |s| mode == NotationMode::Subtractive || !s.is_pair())
}

/// Value of an exact glyph (one symbol or a subtractive pair).
pub fn lookup(glyph: &[u8]) -> Option<u16> {
    SUBTRACTIVE
        .iter()
        .find(|s| s.glyph.as_bytes() == glyph)
        .map(|s| s.value)
}
