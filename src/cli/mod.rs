//! Flag handling for the `roman` binary.
//!
//! `args` maps the flags onto `ConversionParams` and an `OutputTarget`,
//! `runner` installs logging and picks between one value, a range or the
//! usage text, and `errors` holds what can go wrong on the way.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
