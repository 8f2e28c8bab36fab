//! Public configuration and output types

mod config;
mod output;

pub use config::{defaults, Config, ConfigBuilder};
pub use output::{Output, ProcessingMetadata};
