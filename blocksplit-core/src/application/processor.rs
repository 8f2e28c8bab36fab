//! Document processor: boundaries → refinement → blocks → analysis → spans

use std::time::Instant;

use crate::api::{Config, Output, ProcessingMetadata};
use crate::domain::{self, Block, BoundaryList, Document, RefinedBoundaryList, Span};
use crate::error::{Error, Result};
use crate::traits::{AnalysisEngine, BoundaryProvider};

/// Drives one document at a time through splitting and per-block analysis
///
/// Blocks are analysed strictly in order. After every block the engine's
/// [`release`](AnalysisEngine::release) is called before the next block
/// starts, including after a block whose analysis failed.
#[derive(Debug, Clone, Default)]
pub struct BlockProcessor {
    config: Config,
}

impl BlockProcessor {
    /// Create a processor with a validated configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a processor with the given block limit
    pub fn with_max_block_chars(max_block_chars: usize) -> Result<Self> {
        Ok(Self::new(Config::with_max_block_chars(max_block_chars)?))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the provider's boundaries and refine them against the limit
    pub fn refine_boundaries<P: BoundaryProvider>(
        &self,
        document: &Document,
        provider: &P,
    ) -> Result<RefinedBoundaryList> {
        let len = document.char_len();
        let raw = provider.boundaries(document.text());

        let sentences = BoundaryList::sentences(raw.sentences, len)?.with_terminal(len);
        let tokens = BoundaryList::tokens(raw.tokens, len)?;

        Ok(domain::refine(&sentences, &tokens, self.config.limit()))
    }

    /// Split a document into blocks without analysing them
    pub fn split_document<'a, P: BoundaryProvider>(
        &self,
        document: &'a Document,
        provider: &P,
    ) -> Result<Vec<Block<'a>>> {
        let refined = self.refine_boundaries(document, provider)?;
        Ok(domain::split(document, &refined)?)
    }

    /// Process a document and return its absolute spans
    pub fn process<P, E>(&self, document: &Document, provider: &P, engine: &mut E) -> Result<Output>
    where
        P: BoundaryProvider,
        E: AnalysisEngine,
    {
        let mut spans = Vec::new();
        let metadata = self.process_into(document, provider, engine, &mut spans)?;
        Ok(Output { spans, metadata })
    }

    /// Process a document, appending absolute spans to `out`
    ///
    /// If a block fails, spans from the blocks before it remain in `out` and
    /// the error is returned; later blocks are not attempted.
    pub fn process_into<P, E>(
        &self,
        document: &Document,
        provider: &P,
        engine: &mut E,
        out: &mut Vec<Span>,
    ) -> Result<ProcessingMetadata>
    where
        P: BoundaryProvider,
        E: AnalysisEngine,
    {
        let started = Instant::now();

        let refined = self.refine_boundaries(document, provider)?;
        let blocks = domain::split(document, &refined)?;

        tracing::debug!(
            document = document.name().unwrap_or("<unnamed>"),
            chars = document.char_len(),
            blocks = blocks.len(),
            "split document"
        );

        for block in &blocks {
            tracing::debug!(
                block = block.index() + 1,
                offset = block.start(),
                chars = block.char_len(),
                "analysing block"
            );

            let outcome = analyze_block(engine, block).map(|spans| out.extend(spans));
            engine.release();
            outcome?;
        }

        Ok(ProcessingMetadata {
            duration: started.elapsed(),
            blocks: blocks.len(),
            chars_processed: document.char_len(),
            bytes_processed: document.byte_len(),
            token_splits: refined.token_splits(),
            forced_cuts: refined.forced_cuts(),
        })
    }
}

fn analyze_block<E: AnalysisEngine>(engine: &mut E, block: &Block<'_>) -> Result<Vec<Span>> {
    let spans = engine.analyze(block.text()).map_err(|e| Error::Analysis {
        block: block.index(),
        offset: block.start(),
        source: Box::new(e),
    })?;

    if let Some(bad) = spans.iter().find(|s| !s.fits_within(block.char_len())) {
        return Err(Error::InvalidSpan {
            block: block.index(),
            start: bad.start,
            end: bad.end,
            block_len: block.char_len(),
        });
    }

    Ok(domain::to_absolute(spans, block.start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RawBoundaries;
    use std::fmt;

    /// Sentence ends after '.', token ends after every space-delimited word
    struct DotProvider;

    impl BoundaryProvider for DotProvider {
        fn boundaries(&self, text: &str) -> RawBoundaries {
            let mut raw = RawBoundaries::default();
            let chars: Vec<char> = text.chars().collect();
            for (i, &ch) in chars.iter().enumerate() {
                let next_is_space = chars.get(i + 1).map_or(true, |c| *c == ' ');
                if ch != ' ' && next_is_space {
                    raw.tokens.push(i + 1);
                    if ch == '.' {
                        raw.sentences.push(i + 1);
                    }
                }
            }
            raw
        }
    }

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    /// Labels every capitalised word; fails on blocks containing "FAIL"
    #[derive(Default)]
    struct RecordingEngine {
        seen: Vec<String>,
        releases: usize,
        bad_span: bool,
    }

    impl AnalysisEngine for RecordingEngine {
        type Error = Boom;

        fn analyze(&mut self, block: &str) -> std::result::Result<Vec<Span>, Boom> {
            self.seen.push(block.to_string());
            if block.contains("FAIL") {
                return Err(Boom);
            }
            if self.bad_span {
                return Ok(vec![Span::new("X", 0, block.chars().count() + 1)]);
            }
            let mut spans = Vec::new();
            let mut offset = 0;
            for word in block.split(' ') {
                let len = word.chars().count();
                if word.starts_with(|c: char| c.is_uppercase()) {
                    spans.push(Span::new("CAP", offset, offset + len));
                }
                offset += len + 1;
            }
            Ok(spans)
        }

        fn release(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_spans_are_absolute() {
        let processor = BlockProcessor::with_max_block_chars(12).unwrap();
        let doc = Document::new("Alpha went. Beta came.");
        let mut engine = RecordingEngine::default();

        let output = processor.process(&doc, &DotProvider, &mut engine).unwrap();

        assert_eq!(engine.seen, vec!["Alpha went.", " Beta came."]);
        assert_eq!(
            output.spans,
            vec![Span::new("CAP", 0, 5), Span::new("CAP", 12, 16)]
        );
        for span in &output.spans {
            assert_eq!(doc.slice(span.range()).chars().next().map(char::is_uppercase), Some(true));
        }
        assert_eq!(output.metadata.blocks, 2);
        assert_eq!(engine.releases, 2);
    }

    #[test]
    fn test_release_after_failure_and_partial_output_kept() {
        let processor = BlockProcessor::with_max_block_chars(12).unwrap();
        let doc = Document::new("Alpha went. FAIL here. Gamma left.");
        let mut engine = RecordingEngine::default();
        let mut spans = Vec::new();

        let err = processor
            .process_into(&doc, &DotProvider, &mut engine, &mut spans)
            .unwrap_err();

        assert!(matches!(err, Error::Analysis { block: 1, offset: 11, .. }));
        assert_eq!(spans, vec![Span::new("CAP", 0, 5)]);
        assert_eq!(engine.seen.len(), 2);
        assert_eq!(engine.releases, 2);
    }

    #[test]
    fn test_span_outside_block_rejected() {
        let processor = BlockProcessor::default();
        let doc = Document::new("Short text.");
        let mut engine = RecordingEngine {
            bad_span: true,
            ..Default::default()
        };

        let err = processor.process(&doc, &DotProvider, &mut engine).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSpan { block: 0, start: 0, end: 12, block_len: 11 }
        ));
        assert_eq!(engine.releases, 1);
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let processor = BlockProcessor::default();
        let doc = Document::new("");
        let mut engine = RecordingEngine::default();

        let output = processor.process(&doc, &DotProvider, &mut engine).unwrap();
        assert!(output.spans.is_empty());
        assert_eq!(output.metadata.blocks, 0);
        assert!(engine.seen.is_empty());
        assert_eq!(engine.releases, 0);
    }

    #[test]
    fn test_trailing_text_without_sentence_end_is_covered() {
        let processor = BlockProcessor::with_max_block_chars(10).unwrap();
        let doc = Document::new("One. two three four five");
        let blocks = processor.split_document(&doc, &DotProvider).unwrap();

        assert!(blocks.iter().all(|b| b.char_len() <= 10));
        assert_eq!(blocks.iter().map(|b| b.text()).collect::<String>(), doc.text());
    }

    #[test]
    fn test_faulty_provider_fails_fast() {
        struct Backwards;
        impl BoundaryProvider for Backwards {
            fn boundaries(&self, _text: &str) -> RawBoundaries {
                RawBoundaries {
                    sentences: vec![5, 3],
                    tokens: vec![3, 5],
                }
            }
        }

        let processor = BlockProcessor::default();
        let doc = Document::new("abcdef");
        let mut engine = RecordingEngine::default();
        let err = processor.process(&doc, &Backwards, &mut engine).unwrap_err();

        assert!(matches!(err, Error::Boundary(_)));
        assert!(engine.seen.is_empty());
    }
}
