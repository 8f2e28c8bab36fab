//! Sentence boundary refinement
//!
//! Sentences longer than the limit are split at the last token end that keeps
//! the piece within the limit. A token that is itself longer than the limit is
//! cut at exactly `start + limit`, trading a broken word for the size bound.

use crate::domain::boundary::{BoundaryList, RefinedBoundaryList};
use std::num::NonZeroUsize;

/// Where a synthetic boundary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Insertion {
    /// Aligned with a token end
    TokenEnd,
    /// Inside a token
    ForcedCut,
}

/// Pick the split point for the interval starting at `start`
///
/// Returns the boundary and the token search position to resume from.
fn split_point(
    tokens: &[usize],
    cursor: usize,
    start: usize,
    limit: usize,
) -> (usize, usize, Insertion) {
    let target = start + limit;
    // First token end >= target; tokens before `cursor` are all below an
    // earlier, smaller target.
    let idx = cursor + tokens[cursor..].partition_point(|&t| t < target);

    if tokens.get(idx) == Some(&target) {
        return (target, idx, Insertion::TokenEnd);
    }
    match idx.checked_sub(1).map(|i| tokens[i]) {
        Some(before) if before > start => (before, idx, Insertion::TokenEnd),
        _ => (target, idx, Insertion::ForcedCut),
    }
}

/// Insert split points so that no two consecutive boundaries are more than
/// `limit` apart
///
/// Every sentence boundary is kept. The result is built in one forward pass
/// into a fresh vector.
pub fn refine(
    sentences: &BoundaryList,
    tokens: &BoundaryList,
    limit: NonZeroUsize,
) -> RefinedBoundaryList {
    let limit = limit.get();
    let tokens = tokens.as_slice();

    let mut offsets = Vec::with_capacity(sentences.len());
    let mut token_splits = 0;
    let mut forced_cuts = 0;
    let mut previous = 0;
    let mut cursor = 0;

    for &next in sentences.as_slice() {
        while next - previous > limit {
            let (split, resume, insertion) = split_point(tokens, cursor, previous, limit);
            match insertion {
                Insertion::TokenEnd => token_splits += 1,
                Insertion::ForcedCut => {
                    tracing::debug!(at = split, "token longer than limit, cutting inside it");
                    forced_cuts += 1;
                }
            }
            offsets.push(split);
            previous = split;
            cursor = resume;
        }
        offsets.push(next);
        previous = next;
    }

    tracing::trace!(
        sentences = sentences.len(),
        token_splits,
        forced_cuts,
        "refined sentence boundaries"
    );

    RefinedBoundaryList {
        offsets,
        limit,
        token_splits,
        forced_cuts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn run(sentences: Vec<usize>, tokens: Vec<usize>, len: usize, max: usize) -> RefinedBoundaryList {
        let sentences = BoundaryList::sentences(sentences, len).unwrap();
        let tokens = BoundaryList::tokens(tokens, len).unwrap();
        refine(&sentences, &tokens, limit(max))
    }

    #[test]
    fn test_short_sentences_untouched() {
        let refined = run(vec![4, 9, 12], vec![2, 4, 7, 9, 12], 12, 5);
        assert_eq!(refined.as_slice(), &[4, 9, 12]);
        assert_eq!(refined.inserted(), 0);
    }

    #[test]
    fn test_gap_equal_to_limit_untouched() {
        let refined = run(vec![10, 20], vec![3, 10, 15, 20], 20, 10);
        assert_eq!(refined.as_slice(), &[10, 20]);
        assert_eq!(refined.max_gap(), 10);
    }

    #[test]
    fn test_token_exactly_at_target() {
        // 0..25 is one sentence; token ends at 10 and 20
        let refined = run(vec![25], vec![4, 10, 14, 20, 25], 25, 10);
        assert_eq!(refined.as_slice(), &[10, 20, 25]);
        assert_eq!(refined.token_splits(), 2);
        assert_eq!(refined.forced_cuts(), 0);
    }

    #[test]
    fn test_nearest_token_before_target() {
        let refined = run(vec![25], vec![4, 8, 13, 17, 25], 25, 10);
        // 0+10 -> 8, 8+10=18 -> 17, 17+10=27 > 25 stop
        assert_eq!(refined.as_slice(), &[8, 17, 25]);
        assert_eq!(refined.token_splits(), 2);
    }

    #[test]
    fn test_token_longer_than_limit_is_cut() {
        // token 3..30 is longer than the limit
        let refined = run(vec![30], vec![3, 30], 30, 10);
        assert_eq!(refined.as_slice(), &[3, 13, 23, 30]);
        assert_eq!(refined.token_splits(), 1);
        assert_eq!(refined.forced_cuts(), 2);
        assert!(refined.max_gap() <= 10);
    }

    #[test]
    fn test_sentence_boundaries_preserved() {
        let refined = run(vec![3, 40, 44], vec![1, 3, 9, 18, 27, 36, 40, 44], 44, 10);
        for s in [3, 40, 44] {
            assert!(refined.as_slice().contains(&s));
        }
        assert!(refined.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(refined.max_gap() <= 10);
    }

    #[test]
    fn test_no_tokens_falls_back_to_cuts() {
        let refined = run(vec![25], vec![], 25, 10);
        assert_eq!(refined.as_slice(), &[10, 20, 25]);
        assert_eq!(refined.forced_cuts(), 2);
    }

    #[test]
    fn test_limit_one() {
        let refined = run(vec![4], vec![4], 4, 1);
        assert_eq!(refined.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(refined.forced_cuts(), 3);
    }

    #[test]
    fn test_empty_input() {
        let refined = run(vec![], vec![], 0, 10);
        assert!(refined.is_empty());
        assert_eq!(refined.max_gap(), 0);
    }
}
