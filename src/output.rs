//! Result types for a cleaning run.
//!
//! A run never dies on a bad file: each input gets a [`FileResult`] that is
//! either a success (with its verification report) or a captured
//! [`FileError`]. [`RunOutput`] bundles the per-file results with aggregate
//! [`RunStats`], and [`RunOutput::into_result`] is the strict view for
//! callers who treat any per-file failure as fatal.

use crate::error::{CleanError, FileError};
use crate::pipeline::verify::VerifyReport;
use serde::{Deserialize, Serialize};

/// Outcome for a single input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Input file name (no directory component).
    pub file_name: String,
    /// Output files written: 1 in whole-document layout, the page count in
    /// per-page layout. May be non-zero even on error — pages written before
    /// a mid-document write failure stay on disk.
    pub pages_written: usize,
    /// Total cleaned bytes written for this file.
    pub bytes_written: usize,
    /// Residual-anomaly counts over the cleaned text (summed across pages in
    /// per-page layout). Zeroed when the file failed before cleaning.
    pub report: VerifyReport,
    /// The captured failure, if any.
    pub error: Option<FileError>,
    /// Wall-clock time spent on this file.
    pub duration_ms: u64,
}

impl FileResult {
    /// True when the file was processed without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate statistics for a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// `.txt` files found in the input directory.
    pub total_files: usize,
    /// Files cleaned and written without error.
    pub processed_files: usize,
    /// Files that recorded a [`FileError`].
    pub failed_files: usize,
    /// Output files written across the whole run.
    pub pages_written: usize,
    /// Successfully processed files whose verification report was non-zero.
    pub flagged_files: usize,
    /// Wall-clock duration of the whole run.
    pub total_duration_ms: u64,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// Per-file outcomes, sorted by file name.
    pub files: Vec<FileResult>,
    /// Aggregate counts.
    pub stats: RunStats,
}

impl RunOutput {
    /// Strict view: `Err(CleanError::PartialFailure)` if any file failed.
    ///
    /// The default contract is best-effort (failures are logged and the run
    /// continues); this is for callers — like the CLI's `--strict` flag —
    /// that want a non-zero exit instead.
    pub fn into_result(self) -> Result<RunOutput, CleanError> {
        if self.stats.failed_files > 0 {
            Err(CleanError::PartialFailure {
                success: self.stats.processed_files,
                failed: self.stats.failed_files,
                total: self.stats.total_files,
            })
        } else {
            Ok(self)
        }
    }
}
