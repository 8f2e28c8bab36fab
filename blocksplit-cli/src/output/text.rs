//! Plain text output formatter

use super::{display_name, surface, OutputFormatter};
use anyhow::Result;
use blocksplit_core::{Document, Output};
use std::io::Write;

/// Plain text formatter
///
/// Writes a `# name` header per document, then one tab-separated
/// `label start end surface` line per span.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document, output: &Output) -> Result<()> {
        writeln!(
            self.writer,
            "# {} ({} blocks, {} spans)",
            display_name(document),
            output.metadata.blocks,
            output.span_count()
        )?;
        for span in &output.spans {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}",
                span.label,
                span.start,
                span.end,
                surface(document, span)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
