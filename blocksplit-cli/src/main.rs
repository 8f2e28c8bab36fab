//! blocksplit command-line entry point

use anyhow::Result;
use blocksplit_cli::commands::Commands;
use clap::Parser;

/// Split large documents into sentence-aligned blocks and extract spans
#[derive(Debug, Parser)]
#[command(name = "blocksplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
