//! Core conversion building blocks: input classification, Arabic validation,
//! the symbol tables, both conversion directions, result formatting and range
//! generation. These are pure primitives consumed by the high-level `api` module.
pub mod arabic;
pub mod classify;
pub mod format;
pub mod params;
pub mod range;
pub mod roman;
pub mod symbols;
