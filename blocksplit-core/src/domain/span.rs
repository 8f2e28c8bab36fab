//! Labelled character spans

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A labelled half-open character interval
///
/// Relative to a block when produced by an analysis engine, relative to the
/// whole document after [`to_absolute`](crate::domain::offset::to_absolute).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Entity label, e.g. `ORG`
    pub label: String,
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Length in characters (0 for reversed spans)
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character range of this span
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True if `start <= end <= len`
    pub fn fits_within(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new("ORG", 3, 8);
        assert_eq!(span.len(), 5);
        assert_eq!(span.range(), 3..8);
        assert!(!span.is_empty());
        assert!(span.fits_within(8));
        assert!(!span.fits_within(7));
    }

    #[test]
    fn test_reversed_span_does_not_fit() {
        let span = Span::new("X", 5, 2);
        assert!(span.is_empty());
        assert!(!span.fits_within(10));
    }

    #[test]
    fn test_span_json_shape() {
        let json = serde_json::to_string(&Span::new("PERSON", 0, 4)).unwrap();
        assert_eq!(json, r#"{"label":"PERSON","start":0,"end":4}"#);
    }
}
