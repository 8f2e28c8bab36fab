//! Block-relative to absolute offset translation

use crate::domain::span::Span;

/// Shift block-relative spans by the block's absolute start offset
///
/// Labels are unchanged and order is preserved.
pub fn to_absolute(spans: Vec<Span>, block_start: usize) -> Vec<Span> {
    spans
        .into_iter()
        .map(|span| Span {
            start: span.start + block_start,
            end: span.end + block_start,
            ..span
        })
        .collect()
}
