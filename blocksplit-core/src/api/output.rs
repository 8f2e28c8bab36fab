//! Output types for block processing

use crate::domain::Span;
use std::time::Duration;

/// Result of processing one document
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// Absolute spans in document order
    pub spans: Vec<Span>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about one document's processing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Number of blocks the document was split into
    pub blocks: usize,
    /// Characters in the document
    pub chars_processed: usize,
    /// Bytes in the document
    pub bytes_processed: usize,
    /// Boundaries added at token ends inside over-long sentences
    pub token_splits: usize,
    /// Boundaries added inside tokens longer than the limit
    pub forced_cuts: usize,
}

impl Output {
    /// Number of spans found
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Spans with a given label
    pub fn spans_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Span> + 'a {
        self.spans.iter().filter(move |span| span.label == label)
    }
}
