//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use anyhow::{Context, Result};
use blocksplit_core::{domain, Block, BlockProcessor, Document, UnicodeBoundaryProvider};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Maximum block size in characters (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SplitFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-vv shows refinement decisions)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Block listing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SplitFormat {
    /// Tab-separated blocks under a document header
    Text,
    /// JSON array of documents with their blocks
    Json,
}

/// One document's block layout
#[derive(Debug, Serialize)]
struct DocumentBlocks {
    document: String,
    chars: usize,
    token_splits: usize,
    forced_cuts: usize,
    blocks: Vec<BlockData>,
}

#[derive(Debug, Serialize)]
struct BlockData {
    index: usize,
    start: usize,
    end: usize,
    chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let processor = BlockProcessor::new(cli_config.core_config(self.max_chars)?);
        let preview_chars = cli_config.output.preview_chars;

        let mut layouts = Vec::new();
        for path in resolve_patterns(&self.input)? {
            let document = FileReader::read_document(&path)?;
            let layout = layout(&processor, &document, preview_chars)
                .map_err(CliError::from_core)
                .with_context(|| format!("Failed to split {}", path.display()))?;
            layouts.push(layout);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            SplitFormat::Text => write_text(&mut out, &layouts)?,
            SplitFormat::Json => {
                if cli_config.output.pretty_json {
                    serde_json::to_writer_pretty(&mut out, &layouts)?;
                } else {
                    serde_json::to_writer(&mut out, &layouts)?;
                }
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn layout(
    processor: &BlockProcessor,
    document: &Document,
    preview_chars: usize,
) -> blocksplit_core::Result<DocumentBlocks> {
    let refined = processor.refine_boundaries(document, &UnicodeBoundaryProvider)?;
    let blocks = domain::split(document, &refined)?;

    Ok(DocumentBlocks {
        document: crate::output::display_name(document).to_string(),
        chars: document.char_len(),
        token_splits: refined.token_splits(),
        forced_cuts: refined.forced_cuts(),
        blocks: blocks.iter().map(|b| block_data(b, preview_chars)).collect(),
    })
}

fn block_data(block: &Block<'_>, preview_chars: usize) -> BlockData {
    let preview = (preview_chars > 0).then(|| {
        let mut preview: String = block
            .text()
            .chars()
            .take(preview_chars)
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        if block.char_len() > preview_chars {
            preview.push_str("...");
        }
        preview
    });

    BlockData {
        index: block.index(),
        start: block.start(),
        end: block.end(),
        chars: block.char_len(),
        preview,
    }
}

fn write_text(out: &mut impl Write, layouts: &[DocumentBlocks]) -> Result<()> {
    for layout in layouts {
        writeln!(
            out,
            "# {} ({} chars, {} blocks, {} token splits, {} forced cuts)",
            layout.document,
            layout.chars,
            layout.blocks.len(),
            layout.token_splits,
            layout.forced_cuts
        )?;
        for block in &layout.blocks {
            write!(out, "{}\t{}\t{}\t{}", block.index, block.start, block.end, block.chars)?;
            if let Some(preview) = &block.preview {
                write!(out, "\t{preview}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
