//! Directory driver: scan, clean, write, report.
//!
//! Processing is best-effort and independent per file: any per-file failure
//! (unreadable file, invalid UTF-8, write error) is captured in that file's
//! [`FileResult`], logged, and the run continues. The only fatal errors are
//! the ones that make the whole run impossible — the top-level directories
//! cannot be created or listed.
//!
//! Files run through the pipeline concurrently up to
//! [`CleanConfig::concurrency`]; the default of 1 keeps strict sequential
//! order. Results are sorted by file name before returning, so the output is
//! deterministic either way.

use crate::config::{CleanConfig, OutputLayout};
use crate::error::{CleanError, FileError};
use crate::output::{FileResult, RunOutput, RunStats};
use crate::pipeline::clean::clean_text;
use crate::pipeline::split::split_pages;
use crate::pipeline::verify::{verify, VerifyReport};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Clean every `.txt` file under the configured input directory.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(RunOutput)` on success, even if some files failed
/// (check `output.stats.failed_files`, or use
/// [`RunOutput::into_result`] for a strict view).
///
/// # Errors
/// Returns `Err(CleanError)` only for fatal errors:
/// - Input or output directory cannot be created
/// - Input directory cannot be listed
pub async fn run(config: &CleanConfig) -> Result<RunOutput, CleanError> {
    let total_start = Instant::now();
    info!(
        "Starting clean run: '{}' → '{}' ({:?} layout)",
        config.input_dir.display(),
        config.output_dir.display(),
        config.layout
    );

    // ── Step 1: Ensure top-level directories ─────────────────────────────
    tokio::fs::create_dir_all(&config.input_dir)
        .await
        .map_err(|e| CleanError::InputDirUnavailable {
            path: config.input_dir.clone(),
            source: e,
        })?;
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| CleanError::OutputDirUnavailable {
            path: config.output_dir.clone(),
            source: e,
        })?;

    // ── Step 2: Scan for input files ─────────────────────────────────────
    let file_names = scan_input(&config.input_dir).await?;
    let total_files = file_names.len();
    info!(
        "Found {} text files in '{}'",
        total_files,
        config.input_dir.display()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_start(total_files);
    }

    // ── Step 3: Process files (best-effort, per-file isolation) ──────────
    let mut files: Vec<FileResult> = stream::iter(file_names.into_iter().map(|name| {
        let config = config.clone();
        async move {
            if let Some(ref cb) = config.progress_callback {
                cb.on_file_start(&name, total_files);
            }
            let result = process_file(&name, &config).await;
            if let Some(ref cb) = config.progress_callback {
                match &result.error {
                    None => cb.on_file_complete(
                        &name,
                        total_files,
                        result.pages_written,
                        result.bytes_written,
                    ),
                    Some(e) => cb.on_file_error(&name, total_files, &e.to_string()),
                }
            }
            result
        }
    }))
    .buffer_unordered(config.concurrency.max(1))
    .collect()
    .await;

    // Sort by file name for consistent output regardless of completion order.
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    // ── Step 4: Aggregate stats ──────────────────────────────────────────
    let processed = files.iter().filter(|f| f.is_ok()).count();
    let failed = files.len() - processed;
    let stats = RunStats {
        total_files,
        processed_files: processed,
        failed_files: failed,
        pages_written: files.iter().map(|f| f.pages_written).sum(),
        flagged_files: files
            .iter()
            .filter(|f| f.is_ok() && !f.report.is_clean())
            .count(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Clean run complete: {}/{} files, {} output files, {}ms total",
        processed, total_files, stats.pages_written, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_complete(total_files, processed);
    }

    Ok(RunOutput { files, stats })
}

/// Synchronous wrapper around [`run`].
///
/// Creates a temporary tokio runtime internally.
pub fn run_sync(config: &CleanConfig) -> Result<RunOutput, CleanError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CleanError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(run(config))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// List `.txt` files (case-insensitive extension) in `dir`, sorted by name.
async fn scan_input(dir: &Path) -> Result<Vec<String>, CleanError> {
    let scan_err = |e: std::io::Error| CleanError::ScanFailed {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(scan_err)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(scan_err)? {
        let path = entry.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !is_txt || !entry.file_type().await.map_err(scan_err)?.is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort_unstable();
    Ok(names)
}

/// Process one input file to completion; never returns an error.
async fn process_file(file_name: &str, config: &CleanConfig) -> FileResult {
    let start = Instant::now();
    let mut result = FileResult {
        file_name: file_name.to_string(),
        pages_written: 0,
        bytes_written: 0,
        report: VerifyReport::default(),
        error: None,
        duration_ms: 0,
    };

    let path = config.input_dir.join(file_name);
    match load_utf8(&path, file_name).await {
        Ok(text) => match config.layout {
            OutputLayout::Whole => clean_whole(&text, file_name, config, &mut result).await,
            OutputLayout::PerPage => clean_per_page(&text, file_name, config, &mut result).await,
        },
        Err(e) => {
            error!("Error processing '{}': {}", file_name, e);
            result.error = Some(e);
        }
    }

    if result.is_ok() {
        info!(
            "Processed '{}': {} file(s), {} bytes",
            file_name, result.pages_written, result.bytes_written
        );
        if config.report_issues && !result.report.is_clean() {
            warn!("Potential issues in '{}': {}", file_name, result.report);
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

/// Variant A: clean the whole document into `<output>/<filename>`.
async fn clean_whole(text: &str, file_name: &str, config: &CleanConfig, result: &mut FileResult) {
    let cleaned = clean_text(text);
    result.report = verify(&cleaned);

    let out_path = config.output_dir.join(file_name);
    match write_atomic(&out_path, &cleaned).await {
        Ok(bytes) => {
            result.pages_written = 1;
            result.bytes_written = bytes;
        }
        Err(e) => {
            error!("Error writing '{}': {}", out_path.display(), e);
            result.error = Some(FileError::WriteFailed {
                file: file_name.to_string(),
                path: out_path,
                detail: e.to_string(),
            });
        }
    }
}

/// Variant B: split on `--- Page N ---`, clean each page independently,
/// write `<output>/<stem>/pages/page<N>.txt`.
///
/// Pages written before a mid-document write failure stay on disk; the
/// failure is recorded and the remaining pages are skipped.
async fn clean_per_page(text: &str, file_name: &str, config: &CleanConfig, result: &mut FileResult) {
    let pages = split_pages(text);
    if pages.is_empty() {
        warn!("No page markers in '{}'; nothing written", file_name);
        result.error = Some(FileError::NoPageMarkers {
            file: file_name.to_string(),
        });
        return;
    }
    debug!("'{}': {} page markers", file_name, pages.len());

    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let pages_dir = config.output_dir.join(&stem).join("pages");

    if let Err(e) = tokio::fs::create_dir_all(&pages_dir).await {
        error!("Error creating '{}': {}", pages_dir.display(), e);
        result.error = Some(FileError::WriteFailed {
            file: file_name.to_string(),
            path: pages_dir,
            detail: e.to_string(),
        });
        return;
    }

    for page in &pages {
        let cleaned = clean_text(&page.text);
        result.report.merge(&verify(&cleaned));

        let out_path = pages_dir.join(format!("page{}.txt", page.number));
        match write_atomic(&out_path, &cleaned).await {
            Ok(bytes) => {
                result.pages_written += 1;
                result.bytes_written += bytes;
            }
            Err(e) => {
                error!("Error writing '{}': {}", out_path.display(), e);
                result.error = Some(FileError::WriteFailed {
                    file: file_name.to_string(),
                    path: out_path,
                    detail: e.to_string(),
                });
                return;
            }
        }
    }
}

/// Read a file and decode it as UTF-8.
async fn load_utf8(path: &Path, file_name: &str) -> Result<String, FileError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FileError::ReadFailed {
            file: file_name.to_string(),
            detail: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| FileError::InvalidUtf8 {
        file: file_name.to_string(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Atomic write: temp file + rename, so a crash never leaves a half-written
/// output file. Returns the byte count written.
async fn write_atomic(path: &Path, text: &str) -> std::io::Result<usize> {
    let tmp: PathBuf = path.with_extension("txt.tmp");
    tokio::fs::write(&tmp, text).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(text.len())
}
