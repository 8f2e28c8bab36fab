//! Built-in analysis engine: labelled regular expressions

use regex::Regex;
use std::convert::Infallible;

use crate::domain::Span;
use crate::error::{Error, Result};
use crate::traits::AnalysisEngine;

/// A label and the pattern that produces it
#[derive(Debug, Clone)]
pub struct PatternRule {
    label: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let label = label.into();
        let regex = Regex::new(pattern).map_err(|e| {
            Error::Configuration(format!("invalid pattern for label '{label}': {e}"))
        })?;
        Ok(Self { label, regex })
    }

    /// Label assigned to matches
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Entity extractor that labels every match of a set of regular expressions
///
/// Spans are returned ordered by start offset, then label. The engine keeps a
/// byte-to-character table and a match buffer between calls to
/// [`analyze`](AnalysisEngine::analyze); [`release`](AnalysisEngine::release)
/// frees both.
#[derive(Debug, Clone, Default)]
pub struct PatternEngine {
    rules: Vec<PatternRule>,
    /// Byte offset of each character of the current block
    char_starts: Vec<usize>,
    matches: Vec<Span>,
}

impl PatternEngine {
    /// Create an engine with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from `(label, pattern)` pairs
    pub fn from_rules<I, L, P>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: AsRef<str>,
    {
        let mut engine = Self::new();
        for (label, pattern) in rules {
            engine.add_rule(label, pattern.as_ref())?;
        }
        Ok(engine)
    }

    /// Add a rule
    pub fn add_rule(&mut self, label: impl Into<String>, pattern: &str) -> Result<()> {
        self.rules.push(PatternRule::new(label, pattern)?);
        Ok(())
    }

    /// Add a rule, builder style
    pub fn with_rule(mut self, label: impl Into<String>, pattern: &str) -> Result<Self> {
        self.add_rule(label, pattern)?;
        Ok(self)
    }

    /// Configured rules
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Bytes currently held by scratch buffers
    pub fn scratch_bytes(&self) -> usize {
        self.char_starts.capacity() * std::mem::size_of::<usize>()
            + self.matches.capacity() * std::mem::size_of::<Span>()
    }

    fn char_offset(&self, byte: usize) -> usize {
        if self.char_starts.is_empty() {
            byte
        } else {
            self.char_starts.partition_point(|&start| start < byte)
        }
    }
}

impl AnalysisEngine for PatternEngine {
    type Error = Infallible;

    fn analyze(&mut self, block: &str) -> std::result::Result<Vec<Span>, Infallible> {
        self.char_starts.clear();
        if !block.is_ascii() {
            self.char_starts.extend(block.char_indices().map(|(i, _)| i));
        }

        self.matches.clear();
        for rule in &self.rules {
            for m in rule.regex.find_iter(block) {
                let span = Span::new(
                    rule.label.as_str(),
                    self.char_offset(m.start()),
                    self.char_offset(m.end()),
                );
                self.matches.push(span);
            }
        }
        self.matches
            .sort_by(|a, b| (a.start, &a.label, a.end).cmp(&(b.start, &b.label, b.end)));

        Ok(self.matches.drain(..).collect())
    }

    fn release(&mut self) {
        self.char_starts = Vec::new();
        self.matches = Vec::new();
    }
}
