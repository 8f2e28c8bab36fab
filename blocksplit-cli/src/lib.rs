//! blocksplit CLI library
//!
//! Command-line front end for the blocksplit block splitter: reads files,
//! splits them into size-bounded blocks and reports the spans a pattern
//! engine finds, with document-absolute offsets.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
