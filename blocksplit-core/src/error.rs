//! Error types for block splitting and analysis

use crate::domain::boundary::BoundaryKind;
use thiserror::Error;

/// Boxed error returned by an analysis engine
pub type EngineFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Faults in boundaries supplied by a [`BoundaryProvider`](crate::BoundaryProvider)
///
/// These indicate a faulty collaborator rather than bad input data, so they
/// are never recovered from inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// Offsets are not strictly increasing
    #[error("{kind} boundaries not strictly increasing at index {index}: {previous} then {value}")]
    NotAscending {
        /// Which list was faulty
        kind: BoundaryKind,
        /// Index of the offending value
        index: usize,
        /// Value preceding the offending one (0 for the first entry)
        previous: usize,
        /// The offending value
        value: usize,
    },

    /// A boundary lies outside `(0, document_len]`
    #[error("{kind} boundary {value} outside document of {document_len} chars")]
    OutOfRange {
        /// Which list was faulty
        kind: BoundaryKind,
        /// The offending value
        value: usize,
        /// Length of the document in characters
        document_len: usize,
    },

    /// Boundaries were returned for a document with no text
    #[error("{count} {kind} boundaries returned for an empty document")]
    NonEmptyForEmptyDocument {
        /// Which list was faulty
        kind: BoundaryKind,
        /// Number of boundaries returned
        count: usize,
    },

    /// The splitter found no boundary in `(start, start + limit]`
    #[error("no boundary between offset {start} and {mark}")]
    NoProgress {
        /// Start of the block being packed
        start: usize,
        /// Furthest allowed end of the block
        mark: usize,
    },
}

/// Error type for all library operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration, raised before any processing begins
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Boundary provider returned inconsistent boundaries
    #[error("Boundary error: {0}")]
    Boundary(#[from] BoundaryError),

    /// The analysis engine failed on a block
    #[error("Analysis failed on block {block} (offset {offset}): {source}")]
    Analysis {
        /// Index of the failing block
        block: usize,
        /// Absolute start offset of the failing block
        offset: usize,
        /// Error reported by the engine
        #[source]
        source: EngineFailure,
    },

    /// The analysis engine returned a span that does not fit its block
    #[error("Span {start}..{end} does not fit block {block} of {block_len} chars")]
    InvalidSpan {
        /// Index of the block
        block: usize,
        /// Block-relative start
        start: usize,
        /// Block-relative end
        end: usize,
        /// Block length in characters
        block_len: usize,
    },
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
