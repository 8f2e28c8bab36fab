//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}";

/// Progress bar over input documents, drawn on stderr
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar for `total` documents
    ///
    /// Nothing is drawn when quiet or for a single document.
    pub fn init_documents(&mut self, total: u64) {
        if self.quiet || total < 2 {
            return;
        }

        let style = match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => style.progress_chars("##-"),
            Err(e) => {
                log::warn!("Progress bar disabled: {e}");
                return;
            }
        };
        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Advance past a processed document
    pub fn document_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.inc(1);
        }
    }

    /// Advance past a document that failed
    pub fn document_failed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Failed: {name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_never_draws() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(10);
        assert!(!reporter.is_active());
        reporter.document_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_document_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_bar_for_many_documents() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(3);
        assert!(reporter.is_active());
        reporter.document_completed("a.txt");
        reporter.document_failed("b.txt");
        reporter.finish();
    }
}
