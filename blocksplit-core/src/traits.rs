//! Collaborator traits consumed by the block processor

use crate::domain::Span;

/// Raw boundaries reported by a [`BoundaryProvider`]
///
/// Offsets are character offsets into the text, ascending, in
/// `(0, text_len]`. They are validated before use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBoundaries {
    /// Offsets just past the end of each sentence
    pub sentences: Vec<usize>,
    /// Offsets just past the end of each token
    pub tokens: Vec<usize>,
}

/// Source of sentence and token boundaries
///
/// Token ends should be at least as fine-grained as sentence ends: every
/// sentence end is expected to coincide with some token end.
pub trait BoundaryProvider {
    /// Analyse `text` and report its sentence and token ends
    fn boundaries(&self, text: &str) -> RawBoundaries;
}

impl<P: BoundaryProvider + ?Sized> BoundaryProvider for &P {
    fn boundaries(&self, text: &str) -> RawBoundaries {
        (**self).boundaries(text)
    }
}

/// Per-block analysis step, e.g. an entity recognizer
///
/// Engines may hold caches or buffers that grow with use. The block processor
/// calls [`release`](AnalysisEngine::release) after every block, whether the
/// analysis succeeded or not, so those resources never outlive one block.
pub trait AnalysisEngine {
    /// Failure type of [`analyze`](AnalysisEngine::analyze)
    type Error: std::error::Error + Send + Sync + 'static;

    /// Analyse one block and return spans relative to the block's text
    ///
    /// Offsets are in characters of `block`.
    fn analyze(&mut self, block: &str) -> Result<Vec<Span>, Self::Error>;

    /// Drop transient resources held since the last call
    fn release(&mut self);
}

impl<E: AnalysisEngine + ?Sized> AnalysisEngine for &mut E {
    type Error = E::Error;

    fn analyze(&mut self, block: &str) -> Result<Vec<Span>, Self::Error> {
        (**self).analyze(block)
    }

    fn release(&mut self) {
        (**self).release()
    }
}
