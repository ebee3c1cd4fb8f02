//! Verification: count residual anomalies in cleaned text.
//!
//! Purely diagnostic. The cleaning passes are lossy regex substitutions, so
//! the verifier gives a cheap tolerance check on what they left behind:
//! standalone numbers the page-number pass missed, whitespace runs the
//! normaliser missed, and surviving triple-newline gaps. It never mutates the
//! text and never halts processing; the driver logs a non-zero report and
//! moves on.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static RE_ISOLATED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static RE_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());
static RE_TRIPLE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Counts of anomalies remaining after cleaning.
///
/// All-zero means the text passed every check; see [`VerifyReport::is_clean`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Standalone numeric tokens (`\b\d+\b`).
    pub isolated_numbers: usize,
    /// Runs of 3 or more whitespace characters.
    pub excessive_whitespace: usize,
    /// Triple-newline sequences (more than one blank line in a row).
    pub empty_lines: usize,
}

impl VerifyReport {
    /// True when every counter is zero.
    pub fn is_clean(&self) -> bool {
        self.isolated_numbers == 0 && self.excessive_whitespace == 0 && self.empty_lines == 0
    }

    /// Add another report's counts into this one.
    ///
    /// Used by the per-page layout to aggregate a whole document's report.
    pub fn merge(&mut self, other: &VerifyReport) {
        self.isolated_numbers += other.isolated_numbers;
        self.excessive_whitespace += other.excessive_whitespace;
        self.empty_lines += other.empty_lines;
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "isolated_numbers: {}, excessive_whitespace: {}, empty_lines: {}",
            self.isolated_numbers, self.excessive_whitespace, self.empty_lines
        )
    }
}

/// Count residual anomalies in `text`.
pub fn verify(text: &str) -> VerifyReport {
    VerifyReport {
        isolated_numbers: RE_ISOLATED_NUMBER.find_iter(text).count(),
        excessive_whitespace: RE_WHITESPACE_RUN.find_iter(text).count(),
        empty_lines: RE_TRIPLE_NEWLINE.find_iter(text).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_all_zero() {
        let report = verify("The honourable member rose.\n\nHear, hear.");
        assert!(report.is_clean(), "got: {report}");
    }

    #[test]
    fn counts_isolated_numbers() {
        let report = verify("item 42 and 7, but not page42");
        assert_eq!(report.isolated_numbers, 2);
    }

    #[test]
    fn counts_whitespace_runs() {
        let report = verify("a   b\t\t\tc");
        assert_eq!(report.excessive_whitespace, 2);
    }

    #[test]
    fn counts_triple_newlines() {
        let report = verify("a\n\n\nb");
        assert_eq!(report.empty_lines, 1);
        // A single blank line is fine.
        assert_eq!(verify("a\n\nb").empty_lines, 0);
    }

    #[test]
    fn merge_sums_counts() {
        let mut a = verify("1 2 3");
        let b = verify("x    y\n\n\nz");
        a.merge(&b);
        assert_eq!(a.isolated_numbers, 3);
        assert_eq!(a.excessive_whitespace, 1);
        assert_eq!(a.empty_lines, 1);
    }

    #[test]
    fn display_lists_all_counters() {
        let report = verify("99");
        let s = report.to_string();
        assert!(s.contains("isolated_numbers: 1"));
        assert!(s.contains("excessive_whitespace: 0"));
        assert!(s.contains("empty_lines: 0"));
    }
}
