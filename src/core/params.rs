use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{NotationMode, WriteMode};

/// Conversion parameters suitable for config files and embedding presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Symbol table used for Arabic to Roman output
    pub notation: NotationMode,
    /// Emit only the converted value instead of `<input> = <output>`
    pub simple: bool,
}

impl ConversionParams {
    pub fn is_additive(&self) -> bool {
        self.notation == NotationMode::Additive
    }
}

/// Where rendered lines end up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputTarget {
    #[default]
    Terminal,
    File { path: PathBuf, mode: WriteMode },
}
