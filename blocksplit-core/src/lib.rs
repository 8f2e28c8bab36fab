//! Size-bounded, sentence-aware block splitting for per-block text analysis
//!
//! Downstream analysers (entity recognizers, transformer pipelines) often
//! cannot accept inputs above a fixed size. This crate cuts a document into
//! contiguous blocks of at most a configured number of characters, choosing
//! split points at sentence ends where possible, at token ends when a
//! sentence is too long, and inside a token only when a single token exceeds
//! the limit. Spans found in each block are mapped back to absolute document
//! offsets.
//!
//! # Architecture
//!
//! - **Domain layer**: boundary validation, refinement, block packing and
//!   offset mapping. Pure functions over character offsets.
//! - **Application layer**: [`BlockProcessor`], which sequences a
//!   [`BoundaryProvider`], the domain algorithms and an [`AnalysisEngine`].
//! - **Built-ins**: [`UnicodeBoundaryProvider`] (UAX #29) and
//!   [`PatternEngine`] (labelled regular expressions).
//!
//! # Example
//!
//! ```rust
//! use blocksplit_core::{BlockProcessor, Config, Document, PatternEngine, UnicodeBoundaryProvider};
//!
//! let config = Config::builder().max_block_chars(40).build().unwrap();
//! let processor = BlockProcessor::new(config);
//! let mut engine = PatternEngine::new().with_rule("ORG", "Enron").unwrap();
//!
//! let doc = Document::new("Enron filed a report. Analysts read it twice. Enron closed.");
//! let output = processor.process(&doc, &UnicodeBoundaryProvider, &mut engine).unwrap();
//!
//! assert_eq!(output.metadata.blocks, 2);
//! assert_eq!(output.spans.len(), 2);
//! assert_eq!(&doc.text()[output.spans[1].range()], "Enron");
//! ```

pub mod analysis;
pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod segmentation;
pub mod traits;

pub use analysis::{PatternEngine, PatternRule};
pub use api::{Config, ConfigBuilder, Output, ProcessingMetadata};
pub use application::BlockProcessor;
pub use domain::{Block, BoundaryKind, BoundaryList, Document, RefinedBoundaryList, Span};
pub use error::{BoundaryError, Error, Result};
pub use segmentation::UnicodeBoundaryProvider;
pub use traits::{AnalysisEngine, BoundaryProvider, RawBoundaries};
