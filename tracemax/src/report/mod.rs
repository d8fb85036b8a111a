//! Scan result output
//!
//! Stdout carries the progress lines and the final maximum; the optional
//! summary export is written as JSON for downstream tooling.

pub mod summary;

pub use summary::export_summary;

use crate::domain::Size;
use crate::scanner::MaxRecord;
use std::io::{self, Write};

/// Write the progress line for a newly observed maximum.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_new_max<W: Write>(mut out: W, record: &MaxRecord) -> io::Result<()> {
    writeln!(out, "size = {}", record.size)
}

/// Write the closing blank line and the final maximum.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_final<W: Write>(mut out: W, max: Size) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{max}")
}
