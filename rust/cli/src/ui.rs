//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Write a prompt without a newline and flush so it shows before input is read.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
