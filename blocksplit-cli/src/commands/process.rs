//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use blocksplit_core::{BlockProcessor, PatternEngine, UnicodeBoundaryProvider};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum block size in characters (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log failed documents and continue with the rest
    #[arg(long)]
    pub keep_going: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting block processing");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let processor = BlockProcessor::new(cli_config.core_config(self.max_chars)?);
        let mut engine = cli_config.analysis.build_engine()?;
        log::info!(
            "Block limit {} chars, {} rules",
            processor.config().max_block_chars(),
            engine.rules().len()
        );

        let files = resolve_patterns(&self.input)?;
        let mut formatter = create_formatter(
            self.format,
            self.open_output()?,
            cli_config.output.pretty_json,
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(files.len() as u64);

        let mut failed = 0;
        for path in &files {
            let name = path.display().to_string();
            match process_file(path, &processor, &mut engine, formatter.as_mut()) {
                Ok(()) => progress.document_completed(&name),
                Err(e) if self.keep_going => {
                    log::error!("{e:#}");
                    failed += 1;
                    progress.document_failed(&name);
                }
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            }
        }

        formatter.finish()?;
        progress.finish();

        if failed > 0 {
            return Err(CliError::PartialFailure {
                failed,
                total: files.len(),
            }
            .into());
        }

        log::info!("Processed {} documents", files.len());
        Ok(())
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }
}

/// Run one file through the processor and hand its spans to the formatter
fn process_file(
    path: &Path,
    processor: &BlockProcessor,
    engine: &mut PatternEngine,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    let size = FileReader::file_size(path)?;
    log::info!("Processing {} ({:.1} kB)", path.display(), size as f64 / 1024.0);

    let document = FileReader::read_document(path)?;
    let output = processor
        .process(&document, &UnicodeBoundaryProvider, engine)
        .map_err(CliError::from_core)
        .with_context(|| format!("Failed to process {}", path.display()))?;

    log::debug!(
        "{}: {} blocks, {} spans, {} token splits, {} forced cuts in {:?}",
        path.display(),
        output.metadata.blocks,
        output.span_count(),
        output.metadata.token_splits,
        output.metadata.forced_cuts,
        output.metadata.duration
    );

    formatter.format_document(&document, &output)
}
