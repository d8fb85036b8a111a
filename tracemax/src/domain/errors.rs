//! Structured error types for tracemax
//!
//! Using thiserror for automatic Display implementation and error chaining.

use super::types::LineNumber;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read trace directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read trace file {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid size {token:?} at {}:{line}", path.display())]
    InvalidSize { path: PathBuf, line: LineNumber, token: String },
}

impl ScanError {
    /// True when the scan could not get at its input at all
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::DirectoryUnreadable { .. } | Self::FileUnreadable { .. })
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_display() {
        let err = ScanError::InvalidSize {
            path: PathBuf::from("traces/amptjp.rep"),
            line: LineNumber(17),
            token: "12x".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid size \"12x\" at traces/amptjp.rep:17");
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_directory_error_keeps_source() {
        let err = ScanError::DirectoryUnreadable {
            path: PathBuf::from("nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("nope"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_missing_input());
    }
}
