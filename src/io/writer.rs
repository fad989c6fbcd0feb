use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::WriteMode;

/// Write `lines` to `path`, newline-joined with a trailing newline.
///
/// The file is created if missing. `WriteMode::Truncate` discards any existing
/// content; `WriteMode::Append` adds after it. Returns the number of bytes written.
pub fn write_lines<I, S>(path: &Path, lines: I, mode: WriteMode) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    info!("Opening file {:?} in mode {}", path, mode);
    let mut file = options.open(path)?;

    let mut buf = String::new();
    for line in lines {
        buf.push_str(line.as_ref());
        buf.push('\n');
    }
    file.write_all(buf.as_bytes())?;
    file.flush()?;

    info!("Wrote {} bytes to {:?}", buf.len(), path);
    Ok(buf.len())
}

/// Print each line to stdout.
pub fn print_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
