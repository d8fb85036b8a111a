//! CLI argument definitions

use crate::domain::FieldIndex;
use crate::scanner::ScanOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tracemax",
    version,
    about = "Report the largest allocation size across a directory of allocator traces",
    after_help = "\
EXAMPLES:
    tracemax                                 Scan ./traces/
    tracemax ~/malloclab/traces              Scan another directory
    tracemax --skip-invalid --export max.json traces/"
)]
pub struct Args {
    /// Directory of trace files (regular files only, scanned in name order)
    #[arg(value_name = "DIR", default_value = "traces/")]
    pub dir: PathBuf,

    /// Zero-based token index of the size field
    #[arg(short, long, default_value_t = 2)]
    pub field: usize,

    /// Skip lines whose size field is not an integer instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Export a JSON summary of the scan to FILE
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress the per-maximum "size = N" lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions { field: FieldIndex(self.field), skip_invalid: self.skip_invalid }
    }
}
