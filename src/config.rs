//! Configuration types for a cleaning run.
//!
//! All run behaviour is controlled through [`CleanConfig`], built via its
//! [`CleanConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share configs across tasks, serialise them for logging, and diff two
//! runs to understand why their outputs differ.

use crate::error::CleanError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configuration for a directory cleaning run.
///
/// Built via [`CleanConfig::builder()`] or using [`CleanConfig::default()`].
///
/// # Example
/// ```rust
/// use hansard_clean::{CleanConfig, OutputLayout};
///
/// let config = CleanConfig::builder()
///     .input_dir("raw_texts")
///     .output_dir("cleaned_texts")
///     .layout(OutputLayout::PerPage)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct CleanConfig {
    /// Directory scanned for `*.txt` input files. Default: `raw_texts`.
    ///
    /// Created if missing, so a fresh checkout can run the tool once to get
    /// the expected directory skeleton and then drop scans into it.
    pub input_dir: PathBuf,

    /// Directory the cleaned files are written under. Default: `cleaned_texts`.
    pub output_dir: PathBuf,

    /// Output layout: one cleaned file per document, or one file per
    /// `--- Page N ---` segment. Default: [`OutputLayout::Whole`].
    pub layout: OutputLayout,

    /// Number of files processed concurrently. Default: 1.
    ///
    /// Files are independent, so raising this is safe; the default keeps the
    /// original one-file-at-a-time contract and the log output readable.
    pub concurrency: usize,

    /// Log a `warn!` with the residual-anomaly counts when the verifier
    /// flags a cleaned file. Default: true.
    ///
    /// The counts are informational; a flagged file is still written.
    pub report_issues: bool,

    /// Optional callback for per-file progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("raw_texts"),
            output_dir: PathBuf::from("cleaned_texts"),
            layout: OutputLayout::default(),
            concurrency: 1,
            report_issues: true,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for CleanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanConfig")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("layout", &self.layout)
            .field("concurrency", &self.concurrency)
            .field("report_issues", &self.report_issues)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn CleanProgressCallback>"),
            )
            .finish()
    }
}

impl CleanConfig {
    /// Create a new builder for `CleanConfig`.
    pub fn builder() -> CleanConfigBuilder {
        CleanConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`CleanConfig`].
#[derive(Debug)]
pub struct CleanConfigBuilder {
    config: CleanConfig,
}

impl CleanConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn layout(mut self, layout: OutputLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Convenience for the CLI's `--split-pages` flag.
    pub fn split_pages(mut self, split: bool) -> Self {
        self.config.layout = if split {
            OutputLayout::PerPage
        } else {
            OutputLayout::Whole
        };
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n.max(1);
        self
    }

    pub fn report_issues(mut self, v: bool) -> Self {
        self.config.report_issues = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<CleanConfig, CleanError> {
        let c = &self.config;
        if c.concurrency == 0 {
            return Err(CleanError::InvalidConfig("Concurrency must be ≥ 1".into()));
        }
        if c.input_dir == c.output_dir {
            return Err(CleanError::InvalidConfig(
                "Input and output directories must differ".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// How cleaned output is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputLayout {
    /// One cleaned file per document: `<output>/<filename>.txt`. (default)
    #[default]
    Whole,
    /// One cleaned file per `--- Page N ---` segment:
    /// `<output>/<stem>/pages/page<N>.txt`, where `<N>` is the literal
    /// captured marker string.
    PerPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directories() {
        let c = CleanConfig::default();
        assert_eq!(c.input_dir, PathBuf::from("raw_texts"));
        assert_eq!(c.output_dir, PathBuf::from("cleaned_texts"));
        assert_eq!(c.layout, OutputLayout::Whole);
        assert_eq!(c.concurrency, 1);
    }

    #[test]
    fn builder_clamps_concurrency() {
        let c = CleanConfig::builder().concurrency(0).build().unwrap();
        assert_eq!(c.concurrency, 1);
    }

    #[test]
    fn same_in_and_out_dir_rejected() {
        let result = CleanConfig::builder()
            .input_dir("texts")
            .output_dir("texts")
            .build();
        assert!(matches!(result, Err(CleanError::InvalidConfig(_))));
    }

    #[test]
    fn split_pages_selects_per_page_layout() {
        let c = CleanConfig::builder().split_pages(true).build().unwrap();
        assert_eq!(c.layout, OutputLayout::PerPage);
        let c = CleanConfig::builder().split_pages(false).build().unwrap();
        assert_eq!(c.layout, OutputLayout::Whole);
    }

    #[test]
    fn debug_does_not_require_callback_debug() {
        let c = CleanConfig::default();
        let s = format!("{:?}", c);
        assert!(s.contains("raw_texts"));
    }
}
