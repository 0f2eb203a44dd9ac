//! Source positions for tokens and errors.
//!
//! A [`SourceLocation`] is a byte range into the shared input string. The
//! input is reference-counted so tokens and errors can outlive the lexer
//! that produced them without copying the source around.

use alloc::sync::Arc;

/// A byte range into the original input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// The full input the range points into.
    pub input: Arc<str>,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SourceLocation {
    /// Creates a location covering `start..end` of `input`.
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// The text this location covers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.input[self.start..self.end]
    }

    /// 1-based line number of the start of this range.
    #[must_use]
    pub fn line(&self) -> usize {
        1 + self.input[..self.start.min(self.input.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
    }

    /// Merges two optional locations into the range spanning both.
    ///
    /// Returns `None` if either location is missing or the two point into
    /// different inputs.
    #[must_use]
    pub fn range(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        let first = first?;
        let second = second?;
        if !Arc::ptr_eq(&first.input, &second.input) {
            return None;
        }
        Some(Self {
            input: first.input,
            start: first.start,
            end: second.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_counts_newlines_before_start() {
        let input: Arc<str> = Arc::from("a\nbb\nccc");
        assert_eq!(SourceLocation::new(Arc::clone(&input), 0, 1).line(), 1);
        assert_eq!(SourceLocation::new(Arc::clone(&input), 2, 4).line(), 2);
        assert_eq!(SourceLocation::new(input, 5, 8).line(), 3);
    }

    #[test]
    fn range_spans_both_locations() {
        let input: Arc<str> = Arc::from("abcdef");
        let a = SourceLocation::new(Arc::clone(&input), 1, 2);
        let b = SourceLocation::new(Arc::clone(&input), 4, 6);
        let merged = SourceLocation::range(Some(a), Some(b)).unwrap();
        assert_eq!((merged.start, merged.end), (1, 6));
    }
}
