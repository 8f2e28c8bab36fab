//! JSON output formatter

use super::{display_name, OutputFormatter};
use anyhow::Result;
use blocksplit_core::{Document, Output, Span};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects documents and writes one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Per-document record in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Document name, usually its path
    pub document: String,
    /// Length in characters
    pub chars: usize,
    /// Number of blocks the document was split into
    pub blocks: usize,
    /// Spans with document-absolute offsets
    pub spans: Vec<Span>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            document: display_name(document).to_string(),
            chars: document.char_len(),
            blocks: output.metadata.blocks,
            spans: output.spans.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample, SharedBuffer};

    #[test]
    fn test_json_document_record() {
        let (doc, output) = sample();
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.format_document(&doc, &output).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<DocumentData> = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].document, "enron.txt");
        assert_eq!(parsed[0].chars, 37);
        assert_eq!(parsed[0].blocks, 3);
        assert_eq!(parsed[0].spans[2], Span::new("ORG", 16, 29));
    }

    #[test]
    fn test_empty_run_writes_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents().trim(), "[]");
    }
}
