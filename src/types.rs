//! Shared types and enums used across the converter.
//! Includes `Numeral`, `NumeralKind`, `NotationMode`, `Direction` and the
//! output `WriteMode`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MIN_ARABIC: u16 = 1;
pub const MAX_ARABIC: u16 = 4000;

/// An Arabic value known to lie in `MIN_ARABIC..=MAX_ARABIC`.
///
/// Only built from values that passed [`crate::core::arabic::validate`],
/// either directly or as a step between two validated range bounds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Numeral(pub(crate) u16);

impl Numeral {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Numeral> for u16 {
    fn from(n: Numeral) -> Self {
        n.0
    }
}

/// What a raw input string looks like before any conversion is attempted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NumeralKind {
    Arabic,
    Roman,
    Undefined,
}

impl std::fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralKind::Arabic => write!(f, "Arabic"),
            NumeralKind::Roman => write!(f, "Roman"),
            NumeralKind::Undefined => write!(f, "Undefined"),
        }
    }
}

/// Which symbol table is used when producing Roman output.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum NotationMode {
    /// IV, IX, XL, XC, CD, CM
    #[default]
    Subtractive,
    /// IIII, VIIII, XXXX, ...
    Additive,
}

impl std::fmt::Display for NotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotationMode::Subtractive => write!(f, "Subtractive"),
            NotationMode::Additive => write!(f, "Additive"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    ArabicToRoman,
    RomanToArabic,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Truncate => write!(f, "truncate"),
            WriteMode::Append => write!(f, "append"),
        }
    }
}
