#![doc = r#"
roman — Arabic ⇄ Roman numeral conversion for values 1 to 4000.

This crate classifies an input string as an Arabic or Roman numeral and converts it
to the other representation, in standard subtractive notation (IV, IX, XL, ...) or
in additive notation (IIII, VIIII, XXXX, ...). It powers the `roman` CLI and can be
embedded in your own Rust applications.

Quick start: convert a single value
-----------------------------------
```rust
use roman::{convert, ConversionParams, NotationMode};

fn main() -> roman::Result<()> {
    let params = ConversionParams::default();
    assert_eq!(convert("1965", &params)?.render(&params), "1965 = MCMLXV");
    assert_eq!(convert("mcmlxv", &params)?.render(&params), "MCMLXV = 1965");

    let additive = ConversionParams { notation: NotationMode::Additive, simple: true };
    assert_eq!(convert("1965", &additive)?.render(&additive), "MDCCCCLXV");
    Ok(())
}
```

Ranges and output targets
-------------------------
```rust,no_run
use std::path::PathBuf;
use roman::{convert_range, emit, ConversionParams, OutputTarget, WriteMode};

fn main() -> roman::Result<()> {
    let lines = convert_range(100, 250, &ConversionParams::default())?;
    emit(lines, &OutputTarget::File { path: PathBuf::from("out.txt"), mode: WriteMode::Append })
}
```

Error handling
--------------
All public functions return `roman::Result<T>`; match on `roman::Error` to tell
malformed integers, out-of-range values, unknown symbols and unclassifiable input apart.

```rust
use roman::{convert, ConversionParams, Error};

match convert("4001", &ConversionParams::default()) {
    Err(Error::Range { value }) => assert_eq!(value, 4001),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — classifier, validator, symbol tables, converters, formatter, range generator.
- [`types`] — `Numeral`, `NumeralKind`, `NotationMode`, `WriteMode`.
- [`io`] — terminal and line-delimited file output.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{ConversionParams, OutputTarget};
pub use error::{Error, Result};
pub use types::{Direction, MAX_ARABIC, MIN_ARABIC, NotationMode, Numeral, NumeralKind, WriteMode};

// Core primitives
pub use crate::core::arabic::{parse as parse_arabic, validate as validate_arabic};
pub use crate::core::classify::classify;
pub use crate::core::format::format_value;
pub use crate::core::range::RangeLines;
pub use crate::core::roman::{to_arabic, to_roman};

// High-level API re-exports
pub use api::{Conversion, convert, convert_range, emit};
