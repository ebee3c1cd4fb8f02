//! Progress-callback trait for per-file cleaning events.
//!
//! Inject an [`Arc<dyn CleanProgressCallback>`] via
//! [`crate::config::CleanConfigBuilder::progress_callback`] to receive
//! real-time events as the driver works through the input directory.
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a channel, a database record, or a terminal progress bar
//! without the library knowing anything about how the host application
//! communicates. The trait is `Send + Sync` so it works correctly when files
//! are processed concurrently.

use std::sync::Arc;

/// Called by the driver as it processes each input file.
///
/// Implementations must be `Send + Sync` (files may be processed concurrently
/// when `concurrency > 1`). All methods have default no-op implementations so
/// callers only override what they care about.
pub trait CleanProgressCallback: Send + Sync {
    /// Called once after the input directory has been scanned.
    ///
    /// # Arguments
    /// * `total_files` — number of `.txt` files that will be processed
    fn on_run_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called just before a file is read.
    fn on_file_start(&self, file: &str, total_files: usize) {
        let _ = (file, total_files);
    }

    /// Called when a file has been cleaned and written successfully.
    ///
    /// # Arguments
    /// * `pages_written` — 1 in whole-document layout, the page count otherwise
    /// * `bytes_written` — total cleaned bytes written for this file
    fn on_file_complete(&self, file: &str, total_files: usize, pages_written: usize, bytes_written: usize) {
        let _ = (file, total_files, pages_written, bytes_written);
    }

    /// Called when a file fails (unreadable, invalid UTF-8, write error).
    fn on_file_error(&self, file: &str, total_files: usize, error: &str) {
        let _ = (file, total_files, error);
    }

    /// Called once after every file has been attempted.
    fn on_run_complete(&self, total_files: usize, success_count: usize) {
        let _ = (total_files, success_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl CleanProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::CleanConfig`].
pub type ProgressCallback = Arc<dyn CleanProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        errors: AtomicUsize,
        run_total: AtomicUsize,
        run_success: AtomicUsize,
    }

    impl CleanProgressCallback for TrackingCallback {
        fn on_run_start(&self, total_files: usize) {
            self.run_total.store(total_files, Ordering::SeqCst);
        }

        fn on_file_start(&self, _file: &str, _total: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_complete(&self, _file: &str, _total: usize, _pages: usize, _bytes: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_error(&self, _file: &str, _total: usize, _error: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }

        fn on_run_complete(&self, _total: usize, success_count: usize) {
            self.run_success.store(success_count, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(3);
        cb.on_file_start("a.txt", 3);
        cb.on_file_complete("a.txt", 3, 1, 42);
        cb.on_file_error("b.txt", 3, "read failed");
        cb.on_run_complete(3, 2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            run_total: AtomicUsize::new(0),
            run_success: AtomicUsize::new(0),
        };

        tracker.on_run_start(2);
        tracker.on_file_start("a.txt", 2);
        tracker.on_file_complete("a.txt", 2, 4, 2048);
        tracker.on_file_start("b.txt", 2);
        tracker.on_file_error("b.txt", 2, "not valid UTF-8");
        tracker.on_run_complete(2, 1);

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.run_total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.run_success.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn CleanProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_run_start(10);
        cb.on_file_start("x.txt", 10);
        cb.on_file_complete("x.txt", 10, 1, 512);
    }
}
