//! Domain model for tracemax
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety via newtype pattern
//! - Structured error handling

pub mod errors;
pub mod types;

pub use types::{FieldIndex, LineNumber, Size};

pub use errors::{ExportError, ScanError};
