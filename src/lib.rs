//! # hansard-clean
//!
//! Clean OCR-derived Hansard (parliamentary transcript) text files.
//!
//! ## Why this crate?
//!
//! Scanned Hansard volumes come out of OCR with the same defects on every
//! page: the repeated debates banner and government-title header, page
//! numbers left as bare digit lines, characters that cannot occur in the
//! source scripts at all, and ragged whitespace wherever column layout
//! confused the recogniser. This crate runs a fixed sequence of regex
//! passes that removes those defects, optionally splits a concatenated
//! volume into per-page files on `--- Page N ---` markers, and reports the
//! anomalies it could not account for.
//!
//! ## Pipeline Overview
//!
//! ```text
//! raw_texts/*.txt
//!  │
//!  ├─ 1. Scan    enumerate .txt files, sorted
//!  ├─ 2. Split   optional: segment on `--- Page N ---` markers
//!  ├─ 3. Clean   headers/footers → page numbers → artifacts → whitespace
//!  ├─ 4. Write   atomic write under cleaned_texts/
//!  └─ 5. Verify  residual-anomaly counts, logged per file
//! ```
//!
//! Processing is best-effort: a file that cannot be read, decoded, or
//! written is logged and recorded in its [`FileResult`]; the run continues
//! with the remaining files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hansard_clean::{run, CleanConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CleanConfig::default(); // raw_texts → cleaned_texts
//!     let output = run(&config).await?;
//!     println!(
//!         "cleaned {}/{} files",
//!         output.stats.processed_files, output.stats.total_files
//!     );
//!     Ok(())
//! }
//! ```
//!
//! The cleaning passes are also usable directly on strings, without any
//! filesystem involvement:
//!
//! ```rust
//! use hansard_clean::clean_text;
//!
//! let cleaned = clean_text("ගරු   මන්ත්‍රීතුමා\n\n\n42\n\nrose.");
//! assert!(!cleaned.contains("42"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `hansard-clean` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! hansard-clean = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{CleanConfig, CleanConfigBuilder, OutputLayout};
pub use error::{CleanError, FileError};
pub use output::{FileResult, RunOutput, RunStats};
pub use pipeline::clean::clean_text;
pub use pipeline::split::{split_pages, RawPage};
pub use pipeline::verify::{verify, VerifyReport};
pub use process::{run, run_sync};
pub use progress::{CleanProgressCallback, NoopProgressCallback, ProgressCallback};
