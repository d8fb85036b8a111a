//! Running maximum with provenance

use crate::domain::{LineNumber, Size};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where a new maximum was first observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxRecord {
    pub size: Size,
    pub path: PathBuf,
    pub line: LineNumber,
}

/// Monotonic maximum accumulator, starting at 0
#[derive(Debug, Default)]
pub struct MaxTracker {
    max: Size,
    location: Option<MaxRecord>,
}

impl MaxTracker {
    /// Create a tracker whose maximum is 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one size value.
    ///
    /// Returns the new record only when `size` is strictly greater than the
    /// current maximum; ties keep the earliest location.
    pub fn observe(&mut self, size: Size, path: &Path, line: LineNumber) -> Option<&MaxRecord> {
        if size <= self.max {
            return None;
        }

        self.max = size;
        self.location = Some(MaxRecord { size, path: path.to_path_buf(), line });
        self.location.as_ref()
    }

    /// Current maximum
    #[must_use]
    pub fn max(&self) -> Size {
        self.max
    }

    /// Location of the current maximum, `None` while it is still the initial 0
    #[must_use]
    pub fn into_location(self) -> Option<MaxRecord> {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tracker = MaxTracker::new();
        assert_eq!(tracker.max(), Size(0));
        assert!(tracker.into_location().is_none());
    }

    #[test]
    fn test_reports_only_strict_increases() {
        let mut tracker = MaxTracker::new();
        let path = Path::new("t.rep");

        assert!(tracker.observe(Size(10), path, LineNumber(1)).is_some());
        assert!(tracker.observe(Size(10), path, LineNumber(2)).is_none());
        assert!(tracker.observe(Size(5), path, LineNumber(3)).is_none());

        let record = tracker.observe(Size(99), path, LineNumber(4)).cloned();
        assert_eq!(record.map(|r| (r.size, r.line)), Some((Size(99), LineNumber(4))));
        assert_eq!(tracker.max(), Size(99));
    }

    #[test]
    fn test_ignores_zero_and_negative() {
        let mut tracker = MaxTracker::new();
        assert!(tracker.observe(Size(0), Path::new("t"), LineNumber(1)).is_none());
        assert!(tracker.observe(Size(-4), Path::new("t"), LineNumber(2)).is_none());
        assert_eq!(tracker.max(), Size(0));
    }

    #[test]
    fn test_tie_keeps_first_location() {
        let mut tracker = MaxTracker::new();
        tracker.observe(Size(7), Path::new("a"), LineNumber(1));
        tracker.observe(Size(7), Path::new("b"), LineNumber(9));
        assert_eq!(tracker.into_location().map(|r| r.path), Some(PathBuf::from("a")));
    }
}
