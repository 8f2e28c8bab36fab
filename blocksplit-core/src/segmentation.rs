//! Built-in boundary provider based on Unicode text segmentation (UAX #29)

use unicode_segmentation::UnicodeSegmentation;

use crate::traits::{BoundaryProvider, RawBoundaries};

/// Converts ascending byte offsets into character offsets in one pass
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// `byte` must not be below the previous call's argument
    fn advance_to(&mut self, byte: usize) -> usize {
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Sentence and token boundaries from UAX #29 segmentation
///
/// Sentence segments carry their trailing whitespace, so a token here is a
/// word segment together with any whitespace that follows it, up to the next
/// sentence end. Every sentence end is therefore also a token end.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBoundaryProvider;

impl UnicodeBoundaryProvider {
    /// Create a provider
    pub fn new() -> Self {
        Self
    }

    fn sentence_ends(text: &str) -> Vec<usize> {
        let mut cursor = CharCursor::new(text);
        text.split_sentence_bound_indices()
            .map(|(start, sentence)| cursor.advance_to(start + sentence.len()))
            .collect()
    }

    /// `sentence_ends` must be ascending
    fn token_ends(text: &str, sentence_ends: &[usize]) -> Vec<usize> {
        let mut cursor = CharCursor::new(text);
        let mut ends: Vec<usize> = Vec::new();

        for (start, word) in text.split_word_bound_indices() {
            let end = cursor.advance_to(start + word.len());
            let is_space = word.chars().all(char::is_whitespace);
            match ends.last_mut() {
                // Whitespace never carries a token past a sentence end
                Some(last) if is_space && sentence_ends.binary_search(last).is_err() => {
                    *last = end
                }
                _ => ends.push(end),
            }
        }

        ends
    }
}

impl BoundaryProvider for UnicodeBoundaryProvider {
    fn boundaries(&self, text: &str) -> RawBoundaries {
        let sentences = Self::sentence_ends(text);
        let tokens = Self::token_ends(text, &sentences);
        RawBoundaries { sentences, tokens }
    }
}
