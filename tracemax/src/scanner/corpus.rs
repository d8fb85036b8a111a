//! Trace corpus enumeration

use crate::domain::ScanError;
use std::fs;
use std::path::{Path, PathBuf};

/// List the regular files directly inside `dir`, sorted by path.
///
/// Sub-directories and other non-regular entries are ignored. Symlinks are
/// followed, so a link to a regular file counts.
///
/// # Errors
/// Returns `ScanError::DirectoryUnreadable` if `dir` is missing or cannot be
/// listed.
pub fn list_trace_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let unreadable = |source| ScanError::DirectoryUnreadable { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
