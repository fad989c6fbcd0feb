//! I/O layer for emitting rendered lines.
//! Provides the line-delimited file `writer` and terminal printing.
pub mod writer;
pub use writer::{print_lines, write_lines};
