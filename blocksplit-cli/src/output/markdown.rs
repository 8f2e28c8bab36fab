//! Markdown output formatter

use super::{display_name, surface, OutputFormatter};
use anyhow::Result;
use blocksplit_core::{Document, Output};
use std::io::Write;

/// Markdown formatter - one section per document with a numbered span list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    span_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            span_count: 0,
            document_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &Document, output: &Output) -> Result<()> {
        self.document_count += 1;
        self.span_count += output.span_count();

        writeln!(self.writer, "## {}", display_name(document))?;
        writeln!(self.writer)?;
        for (i, span) in output.spans.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}** `{}..{}` {}",
                i + 1,
                span.label,
                span.start,
                span.end,
                surface(document, span)
            )?;
        }
        if output.spans.is_empty() {
            writeln!(self.writer, "*No spans found*")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total spans: {} in {} documents*",
            self.span_count, self.document_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
