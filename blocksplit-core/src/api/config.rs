//! Configuration API for block processing

use crate::error::{Error, Result};
use std::num::NonZeroUsize;

/// Default configuration constants
pub mod defaults {
    /// Default maximum block size in characters
    pub const MAX_BLOCK_CHARS: usize = 100_000;
}

/// Processing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_block_chars: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_block_chars: NonZeroUsize::new(defaults::MAX_BLOCK_CHARS)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration with the given block limit
    pub fn with_max_block_chars(max_block_chars: usize) -> Result<Self> {
        Self::builder().max_block_chars(max_block_chars).build()
    }

    /// Maximum block size in characters
    pub fn max_block_chars(&self) -> usize {
        self.max_block_chars.get()
    }

    /// Maximum block size as a non-zero limit
    pub fn limit(&self) -> NonZeroUsize {
        self.max_block_chars
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_block_chars: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum block size in characters
    pub fn max_block_chars(mut self, chars: usize) -> Self {
        self.max_block_chars = Some(chars);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(chars) = self.max_block_chars {
            config.max_block_chars = NonZeroUsize::new(chars).ok_or_else(|| {
                Error::Configuration("max_block_chars must be greater than 0".into())
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = Config::default();
        assert_eq!(config.max_block_chars(), defaults::MAX_BLOCK_CHARS);
        assert_eq!(Config::builder().build().unwrap(), config);
    }

    #[test]
    fn test_custom_limit() {
        let config = Config::builder().max_block_chars(512).build().unwrap();
        assert_eq!(config.max_block_chars(), 512);
        assert_eq!(config.limit().get(), 512);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::with_max_block_chars(0).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: max_block_chars must be greater than 0"
        );
    }
}
