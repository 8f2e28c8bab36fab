//! Immutable documents addressed by character offset

use std::ops::Range;

/// An immutable text buffer addressed by character offsets
///
/// All offsets handed to and returned from this crate count Unicode scalar
/// values, not bytes. Non-ASCII documents keep a table mapping each character
/// offset to its byte offset so slicing stays O(1).
#[derive(Debug, Clone)]
pub struct Document {
    name: Option<String>,
    text: String,
    char_len: usize,
    /// `byte_starts[i]` is the byte offset of character `i`; one extra entry
    /// holds `text.len()`. `None` when the text is ASCII.
    byte_starts: Option<Vec<usize>>,
}

impl Document {
    /// Create an unnamed document
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (char_len, byte_starts) = if text.is_ascii() {
            (text.len(), None)
        } else {
            let mut starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
            let char_len = starts.len();
            starts.push(text.len());
            (char_len, Some(starts))
        };

        Self {
            name: None,
            text,
            char_len,
            byte_starts,
        }
    }

    /// Create a document carrying a name (file name, URL, ...)
    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut doc = Self::new(text);
        doc.name = Some(name.into());
        doc
    }

    /// Document name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Full text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Length in bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the document has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of a character offset
    ///
    /// # Panics
    ///
    /// Panics if `char_offset > self.char_len()`.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        assert!(
            char_offset <= self.char_len,
            "char offset {char_offset} beyond document of {} chars",
            self.char_len
        );
        match &self.byte_starts {
            Some(starts) => starts[char_offset],
            None => char_offset,
        }
    }

    /// Slice the text by a character range
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or extends past the end.
    pub fn slice(&self, range: Range<usize>) -> &str {
        assert!(range.start <= range.end, "reversed range {range:?}");
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        &self.text[start..end]
    }
}
