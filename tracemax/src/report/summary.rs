use crate::domain::ExportError;
use crate::scanner::ScanSummary;
use std::io::Write;

/// Export a scan summary as pretty-printed JSON to any writer.
///
/// # Example
/// ```
/// use tracemax::report::export_summary;
/// use tracemax::scanner::Scanner;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let summary = Scanner::default().scan_dir(Path::new("traces"), |_| {})?;
///
/// let mut buffer = Vec::new();
/// export_summary(&summary, &mut buffer)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns `ExportError` if serialisation or the write fails.
pub fn export_summary<W: Write>(summary: &ScanSummary, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
