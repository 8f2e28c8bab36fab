//! Validated boundary lists

use crate::error::BoundaryError;
use core::fmt;

/// Which kind of boundary a list holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// End of a sentence
    Sentence,
    /// End of a token
    Token,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Sentence => write!(f, "sentence"),
            BoundaryKind::Token => write!(f, "token"),
        }
    }
}

/// Strictly increasing character offsets in `(0, document_len]`
///
/// The leading offset 0 is implicit and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryList {
    kind: BoundaryKind,
    offsets: Vec<usize>,
}

impl BoundaryList {
    /// Validate raw offsets against a document length
    pub fn new(
        kind: BoundaryKind,
        offsets: Vec<usize>,
        document_len: usize,
    ) -> Result<Self, BoundaryError> {
        if document_len == 0 {
            if offsets.is_empty() {
                return Ok(Self { kind, offsets });
            }
            return Err(BoundaryError::NonEmptyForEmptyDocument {
                kind,
                count: offsets.len(),
            });
        }

        let mut previous = 0;
        for (index, &value) in offsets.iter().enumerate() {
            if value > document_len {
                return Err(BoundaryError::OutOfRange {
                    kind,
                    value,
                    document_len,
                });
            }
            // Also rejects a leading 0
            if value <= previous {
                return Err(BoundaryError::NotAscending {
                    kind,
                    index,
                    previous,
                    value,
                });
            }
            previous = value;
        }

        Ok(Self { kind, offsets })
    }

    /// Validate sentence-end offsets
    pub fn sentences(offsets: Vec<usize>, document_len: usize) -> Result<Self, BoundaryError> {
        Self::new(BoundaryKind::Sentence, offsets, document_len)
    }

    /// Validate token-end offsets
    pub fn tokens(offsets: Vec<usize>, document_len: usize) -> Result<Self, BoundaryError> {
        Self::new(BoundaryKind::Token, offsets, document_len)
    }

    /// Append `document_len` unless it is already the last offset
    ///
    /// Guarantees that text after the last reported boundary is still
    /// delimited.
    pub fn with_terminal(mut self, document_len: usize) -> Self {
        if document_len > 0 && self.offsets.last() != Some(&document_len) {
            self.offsets.push(document_len);
        }
        self
    }

    /// Kind of boundaries held
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Offsets as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of stored offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if no offsets are stored
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Sentence boundaries augmented so that no gap exceeds the limit
///
/// Produced by [`refine`](crate::domain::refine::refine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinedBoundaryList {
    pub(crate) offsets: Vec<usize>,
    pub(crate) limit: usize,
    pub(crate) token_splits: usize,
    pub(crate) forced_cuts: usize,
}

impl RefinedBoundaryList {
    /// Offsets as a slice (implicit leading 0 omitted)
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if there are no offsets (empty document)
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The limit this list was refined against
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Boundaries inserted at a token end
    pub fn token_splits(&self) -> usize {
        self.token_splits
    }

    /// Boundaries inserted inside a token longer than the limit
    pub fn forced_cuts(&self) -> usize {
        self.forced_cuts
    }

    /// Total synthetic boundaries added to the sentence list
    pub fn inserted(&self) -> usize {
        self.token_splits + self.forced_cuts
    }

    /// Largest distance between consecutive boundaries, counting from 0
    pub fn max_gap(&self) -> usize {
        let mut previous = 0;
        let mut max = 0;
        for &offset in &self.offsets {
            max = max.max(offset - previous);
            previous = offset;
        }
        max
    }
}
