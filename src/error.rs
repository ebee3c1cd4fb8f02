//! Error types for the hansard-clean library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`CleanError`] — **Fatal**: the run cannot proceed at all (top-level
//!   directories cannot be created, invalid configuration). Returned as
//!   `Err(CleanError)` from [`crate::process::run`].
//!
//! * [`FileError`] — **Non-fatal**: a single input file failed (unreadable,
//!   not UTF-8, output write error) but the rest of the directory is fine.
//!   Stored inside [`crate::output::FileResult`] so callers can inspect
//!   partial success rather than losing the whole run to one bad scan.
//!
//! The separation lets callers decide their own tolerance: abort on the first
//! file failure, log and continue, or collect all errors for a post-run report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the hansard-clean library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::output::FileResult`] rather than propagated here.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The input directory does not exist and could not be created.
    #[error("Failed to create input directory '{path}': {source}")]
    InputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory does not exist and could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory exists but its entries could not be listed.
    #[error("Failed to list input directory '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Some files succeeded but at least one failed.
    ///
    /// Returned by [`crate::output::RunOutput::into_result`] when the caller
    /// wants to treat any per-file failure as an error.
    #[error("{failed}/{total} files failed during cleaning")]
    PartialFailure {
        success: usize,
        failed: usize,
        total: usize,
    },

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single input file.
///
/// Stored in [`crate::output::FileResult`] when a file fails.
/// The overall run continues with the remaining files.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum FileError {
    /// The file could not be read from disk.
    #[error("'{file}': read failed: {detail}")]
    ReadFailed { file: String, detail: String },

    /// The file's bytes are not valid UTF-8.
    #[error("'{file}': not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { file: String, valid_up_to: usize },

    /// A cleaned output file could not be written.
    ///
    /// In per-page layout, pages written before the failure remain on disk;
    /// there is no rollback.
    #[error("'{file}': failed to write '{path}': {detail}")]
    WriteFailed {
        file: String,
        path: PathBuf,
        detail: String,
    },

    /// Per-page layout was requested but the document contains no
    /// `--- Page N ---` markers.
    #[error("'{file}': no '--- Page N ---' markers found")]
    NoPageMarkers { file: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_display() {
        let e = CleanError::PartialFailure {
            success: 9,
            failed: 1,
            total: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("1/10"), "got: {msg}");
    }

    #[test]
    fn invalid_utf8_display() {
        let e = FileError::InvalidUtf8 {
            file: "sitting_042.txt".into(),
            valid_up_to: 512,
        };
        assert!(e.to_string().contains("sitting_042.txt"));
        assert!(e.to_string().contains("512"));
    }

    #[test]
    fn write_failed_display() {
        let e = FileError::WriteFailed {
            file: "a.txt".into(),
            path: PathBuf::from("cleaned_texts/a/pages/page3.txt"),
            detail: "disk full".into(),
        };
        assert!(e.to_string().contains("page3.txt"));
        assert!(e.to_string().contains("disk full"));
    }

    #[test]
    fn file_error_round_trips_through_json() {
        let e = FileError::NoPageMarkers {
            file: "b.txt".into(),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: FileError = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, FileError::NoPageMarkers { file } if file == "b.txt"));
    }
}
