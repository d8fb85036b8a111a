//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep a size value from being confused with a line
//! number or a token index, and make function signatures more expressive.

use serde::Serialize;
use std::fmt;

/// Allocation size read from a trace line
///
/// Signed because the size field is parsed as a plain integer. Negative
/// values parse fine but can never become the maximum, which starts at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Size(pub i64);

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line number within a trace file (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineNumber(pub u64);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based position of the size token within a line
///
/// Allocator traces put the size third (`a <id> <size>`), hence the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndex(pub usize);

impl FieldIndex {
    /// Minimum number of tokens a line needs to carry this field
    #[must_use]
    pub fn min_tokens(self) -> usize {
        self.0 + 1
    }
}

impl Default for FieldIndex {
    fn default() -> Self {
        FieldIndex(2)
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field #{}", self.0)
    }
}
