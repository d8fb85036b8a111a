//! # tracemax - largest allocation size across allocator traces
//!
//! Scans a directory of memory-allocator trace files and reports the largest
//! value found in the size field of any line. Trace lines are space separated,
//! typically `a <id> <size>` for allocations, `r <id> <size>` for reallocs and
//! `f <id>` for frees; header lines carry a single number.
//!
//! ## Module Structure
//!
//! - [`scanner`]: directory enumeration, line parsing, running maximum
//! - [`report`]: stdout rendering and JSON summary export
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: core domain types (`Size`, `LineNumber`, `FieldIndex`) and errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Scan ./traces/
//! tracemax
//!
//! # Tolerate malformed size fields and keep a machine-readable summary
//! tracemax --skip-invalid --export summary.json path/to/traces
//!
//! # Watch per-file progress
//! RUST_LOG=debug tracemax
//! ```

pub mod cli;
pub mod domain;
pub mod report;
pub mod scanner;
