//! CLI binary for hansard-clean.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `CleanConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use hansard_clean::{run, CleanConfig, CleanProgressCallback, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-file log
/// lines using [indicatif]. Works correctly when files complete out-of-order
/// (concurrency > 1).
struct CliProgressCallback {
    bar: ProgressBar,
    errors: AtomicUsize,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_run_start
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} files  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        bar.set_style(style);
        bar.set_prefix("Cleaning");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }
}

impl CleanProgressCallback for CliProgressCallback {
    fn on_run_start(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Cleaning {total_files} transcript files…"))
        ));
    }

    fn on_file_start(&self, file: &str, _total: usize) {
        self.bar.set_message(file.to_string());
    }

    fn on_file_complete(&self, file: &str, _total: usize, pages_written: usize, bytes_written: usize) {
        self.bar.println(format!(
            "  {} {:<32}  {}  {}",
            green("✓"),
            file,
            dim(&format!("{pages_written:>3} file(s)")),
            dim(&format!("{bytes_written:>7} bytes")),
        ));
        self.bar.inc(1);
    }

    fn on_file_error(&self, file: &str, _total: usize, error: &str) {
        self.errors.fetch_add(1, Ordering::SeqCst);

        // Truncate very long error messages to keep output tidy.
        let msg: String = if error.chars().count() > 80 {
            let head: String = error.chars().take(79).collect();
            format!("{head}\u{2026}")
        } else {
            error.to_string()
        };

        self.bar
            .println(format!("  {} {:<32}  {}", red("✗"), file, red(&msg)));
        self.bar.inc(1);
    }

    fn on_run_complete(&self, total_files: usize, success_count: usize) {
        let failed = total_files.saturating_sub(success_count);
        self.bar.finish_and_clear();

        if failed == 0 {
            eprintln!(
                "{} {} files cleaned successfully",
                green("✔"),
                bold(&success_count.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} files cleaned  ({} failed)",
                if failed == total_files {
                    red("✘")
                } else {
                    cyan("⚠")
                },
                bold(&success_count.to_string()),
                total_files,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Clean raw_texts/ into cleaned_texts/ (the defaults)
  hansard-clean

  # Explicit directories
  hansard-clean scans/2023 -o clean/2023

  # Split concatenated volumes on `--- Page N ---` markers
  hansard-clean --split-pages

  # Four files at a time, machine-readable summary
  hansard-clean -c 4 --json > report.json

  # Fail the build if any file could not be processed
  hansard-clean --strict

OUTPUT LAYOUT:
  default          cleaned_texts/<filename>.txt
  --split-pages    cleaned_texts/<stem>/pages/page<N>.txt
                   (<N> is the literal number from the page marker)

ENVIRONMENT VARIABLES:
  HANSARD_CLEAN_INPUT        Input directory (same as positional arg)
  HANSARD_CLEAN_OUTPUT       Output directory (same as -o)
  HANSARD_CLEAN_CONCURRENCY  Concurrent files (same as -c)
"#;

/// Clean OCR-derived Hansard transcript text files.
#[derive(Parser, Debug)]
#[command(
    name = "hansard-clean",
    version,
    about = "Clean OCR-derived Hansard transcript text files",
    long_about = "Strip repeated headers and footers, page-number lines, and out-of-alphabet \
OCR noise from parliamentary transcript scans, normalise whitespace, and optionally split \
concatenated volumes into per-page files. Processing is best-effort: a bad file is logged \
and skipped, the rest of the directory is still cleaned.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing raw `.txt` scans.
    #[arg(env = "HANSARD_CLEAN_INPUT", default_value = "raw_texts")]
    input_dir: PathBuf,

    /// Directory cleaned files are written under.
    #[arg(short, long, env = "HANSARD_CLEAN_OUTPUT", default_value = "cleaned_texts")]
    output_dir: PathBuf,

    /// Split each document on `--- Page N ---` markers into per-page files.
    #[arg(long, env = "HANSARD_CLEAN_SPLIT_PAGES")]
    split_pages: bool,

    /// Number of files processed concurrently.
    #[arg(short, long, env = "HANSARD_CLEAN_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,

    /// Print the run summary as JSON instead of human-readable text.
    #[arg(long, env = "HANSARD_CLEAN_JSON")]
    json: bool,

    /// Exit non-zero if any file failed to process.
    #[arg(long)]
    strict: bool,

    /// Disable the progress bar.
    #[arg(long, env = "HANSARD_CLEAN_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "HANSARD_CLEAN_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "HANSARD_CLEAN_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn CleanProgressCallback>)
    } else {
        None
    };

    let mut builder = CleanConfig::builder()
        .input_dir(&cli.input_dir)
        .output_dir(&cli.output_dir)
        .split_pages(cli.split_pages)
        .concurrency(cli.concurrency)
        .report_issues(!cli.quiet);

    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }

    let config = builder.build().context("Invalid configuration")?;

    // ── Run ──────────────────────────────────────────────────────────────
    let output = run(&config).await.context("Clean run failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet {
        let s = &output.stats;
        eprintln!(
            "{}  {}/{} files  {} output file(s)  {}ms  →  {}",
            if s.failed_files == 0 {
                green("✔")
            } else {
                cyan("⚠")
            },
            s.processed_files,
            s.total_files,
            s.pages_written,
            s.total_duration_ms,
            bold(&cli.output_dir.display().to_string()),
        );
        if s.flagged_files > 0 {
            eprintln!(
                "   {} file(s) flagged by the verifier — see warnings above",
                dim(&s.flagged_files.to_string())
            );
        }
        // The progress callback already printed per-file failures.
        if !show_progress {
            for file in output.files.iter().filter(|f| !f.is_ok()) {
                if let Some(ref e) = file.error {
                    eprintln!("   {} {}", red("✗"), e);
                }
            }
        }
    }

    if cli.strict {
        output.into_result().context("Some files failed")?;
    }

    Ok(())
}
