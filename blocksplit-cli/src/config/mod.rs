//! Configuration file support

use anyhow::{Context, Result};
use blocksplit_core::{api::defaults, Config, PatternEngine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Block splitting configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Pattern engine configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Block splitting configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Maximum block size in characters
    pub max_block_chars: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_block_chars: defaults::MAX_BLOCK_CHARS,
        }
    }
}

/// One labelled pattern
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RuleConfig {
    /// Label given to matches
    pub label: String,
    /// Regular expression
    pub pattern: String,
}

/// Pattern engine configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entity rules, applied in order
    pub rules: Vec<RuleConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let rule = |label: &str, pattern: &str| RuleConfig {
            label: label.to_string(),
            pattern: pattern.to_string(),
        };
        Self {
            rules: vec![
                rule("MONEY", r"[$€£]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|[MBK]))?"),
                rule("PERCENT", r"\b\d+(?:\.\d+)?\s?%"),
                rule("DATE", r"\b\d{4}-\d{2}-\d{2}\b"),
                rule("EMAIL", r"\b[\w.+-]+@[\w-]+(?:\.[\w-]+)+\b"),
                rule("URL", r"\bhttps?://[^\s<>]+"),
            ],
        }
    }
}

impl AnalysisConfig {
    /// Compile the rules into a pattern engine
    pub fn build_engine(&self) -> Result<PatternEngine> {
        PatternEngine::from_rules(self.rules.iter().map(|r| (r.label.as_str(), &r.pattern)))
            .map_err(|e| CliError::from_core(e).into())
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Characters of block text shown by `split` (0 = none)
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            preview_chars: 40,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load the file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Core configuration, with an optional command-line override
    pub fn core_config(&self, max_chars_override: Option<usize>) -> Result<Config> {
        let max = max_chars_override.unwrap_or(self.segmentation.max_block_chars);
        Config::with_max_block_chars(max).map_err(|e| CliError::from_core(e).into())
    }
}
