//! Trace scanning pipeline
//!
//! A single forward pass over a static set of trace files:
//!
//! ```text
//! list_trace_files(dir)  → sorted regular files
//!     │
//!     ▼
//! Scanner::scan_file()   → BufReader, one line at a time
//!     │
//!     ▼
//! parse_size(line)       → Short | Size | Invalid
//!     │
//!     ▼
//! MaxTracker::observe()  → on_new_max(&MaxRecord) when the maximum grows
//! ```

pub mod corpus;
pub mod record;
pub mod tracker;

pub use corpus::list_trace_files;
pub use record::{parse_size, LineOutcome};
pub use tracker::{MaxRecord, MaxTracker};

use crate::domain::{FieldIndex, LineNumber, ScanError, Size};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How lines are interpreted
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Token position of the size field
    pub field: FieldIndex,
    /// Skip lines whose size token is not an integer instead of failing
    pub skip_invalid: bool,
}

/// Final result of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub max_size: Size,
    pub max_location: Option<MaxRecord>,
    pub files_scanned: usize,
    pub lines_read: u64,
    pub lines_skipped_short: u64,
    pub lines_skipped_invalid: u64,
}

/// Accumulated state while a scan is in flight
#[derive(Debug, Default)]
pub struct ScanProgress {
    tracker: MaxTracker,
    files_scanned: usize,
    lines_read: u64,
    lines_skipped_short: u64,
    lines_skipped_invalid: u64,
}

impl ScanProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum seen so far
    #[must_use]
    pub fn max(&self) -> Size {
        self.tracker.max()
    }

    #[must_use]
    pub fn finish(self) -> ScanSummary {
        ScanSummary {
            max_size: self.tracker.max(),
            files_scanned: self.files_scanned,
            lines_read: self.lines_read,
            lines_skipped_short: self.lines_skipped_short,
            lines_skipped_invalid: self.lines_skipped_invalid,
            max_location: self.tracker.into_location(),
        }
    }
}

/// Sequential trace scanner
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan every regular file in `dir` in name order.
    ///
    /// `on_new_max` is called each time the running maximum grows, in scan
    /// order, before the next line is read. Records reported before a fatal
    /// error stay reported.
    ///
    /// # Errors
    /// - `DirectoryUnreadable` if `dir` cannot be listed
    /// - `FileUnreadable` if a file cannot be opened or is not UTF-8 text
    /// - `InvalidSize` on a non-integer size token, unless `skip_invalid` is set
    pub fn scan_dir(
        &self,
        dir: &Path,
        mut on_new_max: impl FnMut(&MaxRecord),
    ) -> Result<ScanSummary, ScanError> {
        let files = list_trace_files(dir)?;
        info!(
            "Scanning {} trace files in {} (size at {})",
            files.len(),
            dir.display(),
            self.options.field
        );

        let mut progress = ScanProgress::new();
        for path in &files {
            self.scan_file(path, &mut progress, &mut on_new_max)?;
            debug!("Finished {}, max so far {}", path.display(), progress.max());
        }

        let summary = progress.finish();
        info!(
            "Scanned {} lines ({} short, {} invalid), max size {}",
            summary.lines_read,
            summary.lines_skipped_short,
            summary.lines_skipped_invalid,
            summary.max_size
        );
        Ok(summary)
    }

    /// Scan a single trace file into `progress`.
    ///
    /// The file is closed on return, whether the scan succeeded or not.
    ///
    /// # Errors
    /// See [`Scanner::scan_dir`].
    pub fn scan_file(
        &self,
        path: &Path,
        progress: &mut ScanProgress,
        on_new_max: impl FnMut(&MaxRecord),
    ) -> Result<(), ScanError> {
        debug!("Scanning {}", path.display());
        let file = File::open(path)
            .map_err(|source| ScanError::FileUnreadable { path: path.to_path_buf(), source })?;
        self.scan_reader(path, BufReader::new(file), progress, on_new_max)
    }

    /// Scan lines from any buffered reader, attributing them to `path`.
    ///
    /// # Errors
    /// See [`Scanner::scan_dir`].
    pub fn scan_reader<R: BufRead>(
        &self,
        path: &Path,
        reader: R,
        progress: &mut ScanProgress,
        mut on_new_max: impl FnMut(&MaxRecord),
    ) -> Result<(), ScanError> {
        for (idx, line) in (1u64..).zip(reader.lines()) {
            let line = line
                .map_err(|source| ScanError::FileUnreadable { path: path.to_path_buf(), source })?;
            let line_no = LineNumber(idx);
            progress.lines_read += 1;

            match parse_size(&line, self.options.field) {
                LineOutcome::Short => progress.lines_skipped_short += 1,
                LineOutcome::Size(size) => {
                    if let Some(record) = progress.tracker.observe(size, path, line_no) {
                        debug!("New max {} at {}:{}", record.size, path.display(), line_no);
                        on_new_max(record);
                    }
                }
                LineOutcome::Invalid(token) if self.options.skip_invalid => {
                    warn!("Skipping invalid size {token:?} at {}:{line_no}", path.display());
                    progress.lines_skipped_invalid += 1;
                }
                LineOutcome::Invalid(token) => {
                    return Err(ScanError::InvalidSize { path: path.to_path_buf(), line: line_no, token });
                }
            }
        }

        progress.files_scanned += 1;
        Ok(())
    }
}
