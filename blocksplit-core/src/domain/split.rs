//! Greedy block packing over refined boundaries

use crate::domain::boundary::RefinedBoundaryList;
use crate::domain::document::Document;
use crate::error::BoundaryError;
use std::ops::Range;

/// A contiguous, non-empty slice of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
    index: usize,
    start: usize,
    char_len: usize,
}

impl<'a> Block<'a> {
    /// Block text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Position of this block in the document's block sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Absolute start offset in characters
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute end offset in characters (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.char_len
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Absolute character range covered by this block
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Pack boundary-delimited pieces of `document` into blocks of at most
/// `refined.limit()` characters
///
/// Each block ends at the last refined boundary not beyond `start + limit`.
/// An empty document yields no blocks.
pub fn split<'a>(
    document: &'a Document,
    refined: &RefinedBoundaryList,
) -> Result<Vec<Block<'a>>, BoundaryError> {
    let len = document.char_len();
    let limit = refined.limit();
    let boundaries = refined.as_slice();

    let mut blocks = Vec::with_capacity(len.div_ceil(limit.max(1)));
    let mut start = 0;
    // Index of the first boundary greater than `start`
    let mut pos = 0;

    while len - start > limit {
        let mark = start + limit;
        let next = pos + boundaries[pos..].partition_point(|&b| b <= mark);
        if next == pos {
            return Err(BoundaryError::NoProgress { start, mark });
        }
        let end = boundaries[next - 1];

        blocks.push(make_block(document, blocks.len(), start, end));
        start = end;
        pos = next;
    }

    if start < len {
        blocks.push(make_block(document, blocks.len(), start, len));
    }

    Ok(blocks)
}

fn make_block(document: &Document, index: usize, start: usize, end: usize) -> Block<'_> {
    Block {
        text: document.slice(start..end),
        index,
        start,
        char_len: end - start,
    }
}
