//! Single trace line tokenisation
//!
//! Lines are split on single spaces, not on runs of whitespace, so two
//! adjacent spaces produce an empty token and shift the fields that follow.

use crate::domain::{FieldIndex, Size};

/// What a single trace line contributes to the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Too few tokens to carry a size field (headers, `f <id>` frees, blanks)
    Short,
    /// A parsed size value
    Size(Size),
    /// The size token is present but is not an integer
    Invalid(String),
}

/// Extract the size field from one trace line.
///
/// Surrounding whitespace on the size token itself is ignored, which covers
/// `\r` from CRLF files when the size is the last field.
#[must_use]
pub fn parse_size(line: &str, field: FieldIndex) -> LineOutcome {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < field.min_tokens() {
        return LineOutcome::Short;
    }
    let token = tokens[field.0];

    match token.trim().parse::<i64>() {
        Ok(value) => LineOutcome::Size(Size(value)),
        Err(_) => LineOutcome::Invalid(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> LineOutcome {
        parse_size(line, FieldIndex::default())
    }

    #[test]
    fn test_parse_allocation_line() {
        assert_eq!(parse("a 0 2040"), LineOutcome::Size(Size(2040)));
        assert_eq!(parse("op id 42"), LineOutcome::Size(Size(42)));
    }

    #[test]
    fn test_short_lines_are_skipped() {
        assert_eq!(parse("f 0"), LineOutcome::Short);
        assert_eq!(parse("20000"), LineOutcome::Short);
        assert_eq!(parse(""), LineOutcome::Short);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        assert_eq!(parse("r 3 512 trailing junk"), LineOutcome::Size(Size(512)));
    }

    #[test]
    fn test_trailing_carriage_return() {
        assert_eq!(parse("a 1 64\r"), LineOutcome::Size(Size(64)));
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(parse("a 1 +8"), LineOutcome::Size(Size(8)));
        assert_eq!(parse("a 1 -8"), LineOutcome::Size(Size(-8)));
    }

    #[test]
    fn test_non_numeric_size() {
        assert_eq!(parse("a 1 big"), LineOutcome::Invalid("big".to_string()));
        // Double space before the size leaves an empty token in its place
        assert_eq!(parse("a 1  64"), LineOutcome::Invalid(String::new()));
    }

    #[test]
    fn test_double_space_shifts_fields() {
        assert_eq!(parse("a  1 64"), LineOutcome::Size(Size(1)));
    }

    #[test]
    fn test_rejects_non_i64_spellings() {
        assert_eq!(
            parse("a 1 99999999999999999999"),
            LineOutcome::Invalid("99999999999999999999".to_string())
        );
        assert_eq!(parse("a 1 1_000"), LineOutcome::Invalid("1_000".to_string()));
    }

    #[test]
    fn test_custom_field_index() {
        assert_eq!(parse_size("a 7 64", FieldIndex(1)), LineOutcome::Size(Size(7)));
        assert_eq!(parse_size("a 7 64", FieldIndex(3)), LineOutcome::Short);
    }
}
