//! Generate config command implementation

use crate::config::{AnalysisConfig, OutputConfig};
use anyhow::{Context, Result};
use blocksplit_core::api::defaults;
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the block limit and entity rules");
        println!("2. Validate your configuration:");
        println!("   blocksplit validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   blocksplit process -i input.txt -c {}", self.output.display());

        Ok(())
    }
}

/// Template content, populated with the built-in defaults
fn generate_template() -> String {
    let output = OutputConfig::default();
    let mut template = format!(
        r#"# blocksplit configuration

[segmentation]
# Upper bound on block size, in characters. Blocks end on sentence
# boundaries when possible, then on token boundaries, and are cut
# mid-token only as a last resort.
max_block_chars = {}

[analysis]
# Labelled regular expressions. Every match becomes a span.
# Literal strings ('...') keep backslashes as written.
rules = [
"#,
        defaults::MAX_BLOCK_CHARS
    );

    for rule in AnalysisConfig::default().rules {
        // Infallible for String
        let _ = writeln!(
            template,
            "    {{ label = \"{}\", pattern = '{}' }},",
            rule.label, rule.pattern
        );
    }

    let _ = write!(
        template,
        r#"]

[output]
# Pretty print JSON output
pretty_json = {}
# Characters of block text shown by `blocksplit split` (0 = none)
preview_chars = {}
"#,
        output.pretty_json, output.preview_chars
    );

    template
}
