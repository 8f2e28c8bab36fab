//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match check(&self.config) {
            Ok(summary) => {
                println!("✓ Configuration is valid!");
                println!("  Max block chars: {}", summary.max_block_chars);
                println!("  Rules: {}", summary.labels.join(", "));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[derive(Debug)]
struct Summary {
    max_block_chars: usize,
    labels: Vec<String>,
}

/// Parse the file, check the limit and compile every rule
fn check(path: &std::path::Path) -> Result<Summary> {
    let config = CliConfig::load(path)?;
    let core = config.core_config(None)?;
    let engine = config.analysis.build_engine()?;

    Ok(Summary {
        max_block_chars: core.max_block_chars(),
        labels: engine.rules().iter().map(|r| r.label().to_string()).collect(),
    })
}
