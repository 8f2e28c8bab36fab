//! Output formatting module

use anyhow::Result;
use blocksplit_core::{Document, Output};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated spans, one per line
    Text,
    /// JSON array of documents with their spans
    Json,
    /// Markdown section per document
    Markdown,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Write the spans found in one document
    fn format_document(&mut self, document: &Document, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create a formatter writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Document label used in output headers
pub(crate) fn display_name(document: &Document) -> &str {
    document.name().unwrap_or("<unnamed>")
}

/// Matched text with line breaks and tabs flattened to spaces
pub(crate) fn surface(document: &Document, span: &blocksplit_core::Span) -> String {
    document
        .slice(span.range())
        .chars()
        .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&Document::named("memo.txt", "Hi.")), "memo.txt");
        assert_eq!(display_name(&Document::new("Hi.")), "<unnamed>");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use blocksplit_core::{BlockProcessor, Document, Output, PatternEngine, UnicodeBoundaryProvider};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Writer whose contents can be read after the formatter is done with it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub fn sample() -> (Document, Output) {
        let doc = Document::named("enron.txt", "Enron paid $5M.\nGoldman\tSachs agreed.");
        let mut engine = PatternEngine::from_rules([
            ("ORG", r"Enron|Goldman\sSachs"),
            ("MONEY", r"\$\d+M"),
        ])
        .unwrap();
        let output = BlockProcessor::with_max_block_chars(20)
            .unwrap()
            .process(&doc, &UnicodeBoundaryProvider, &mut engine)
            .unwrap();
        (doc, output)
    }
}
