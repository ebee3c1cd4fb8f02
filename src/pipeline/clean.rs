//! Cleaning passes: deterministic regex cleanup of OCR transcript text.
//!
//! Scanned Hansard volumes come out of OCR with three recurring defects:
//!
//! - The running header repeats on every page: the debates banner line
//!   (පාර්ලිමේන්තු විවාද …) and the full government title line.
//! - Page numbers survive as lines containing nothing but digits.
//! - The recogniser emits characters that cannot occur in the source text
//!   at all — stray box-drawing glyphs, Latin-1 punctuation, Devanagari
//!   lookalikes — plus ragged whitespace wherever column layout confused it.
//!
//! This module applies four cheap, deterministic regex passes that fix those
//! defects without touching content. Each pass is a pure function
//! (`&str → String`) with no shared state, so the pipeline is easy to extend
//! or re-order, and each pass is independently testable.
//!
//! ## Pass Order
//!
//! Passes must run in this specific order: headers before page numbers so a
//! banner's own page number is already gone, the artifact filter before
//! whitespace normalisation so the gaps it leaves are collapsed, and
//! normalisation last so its guarantees hold on the final text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all cleaning passes to raw OCR text.
///
/// Passes (applied in order):
/// 1. Remove repeated header/footer lines (debates banner, government title)
/// 2. Strip page-number lines (a number alone between two newlines)
/// 3. Drop characters outside the allow-list (Sinhala, Tamil, Latin letters,
///    whitespace, and `.,!?()"'-`)
/// 4. Normalise whitespace (single spaces, at most one blank line, trimmed)
///
/// The result is stable: cleaning already-cleaned text is a no-op.
pub fn clean_text(input: &str) -> String {
    let s = remove_headers_footers(input);
    let s = strip_page_numbers(&s);
    let s = remove_ocr_artifacts(&s);
    normalize_whitespace(&s)
}

// ── Pass 1: Remove headers and footers ───────────────────────────────────────

/// The debates banner: the banner line plus the line that follows it
/// (the sitting date in the scanned volumes).
static RE_DEBATE_BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"පාර්ලිමේන්තු විවාද\s*\n.*\n").unwrap());

/// Any line carrying the full government title.
static RE_GOVERNMENT_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*ශ්‍රී ලංකා ප්‍රජාතාන්ත්‍රික සමාජවාදී ජනරජයේ පාර්ලිමේන්තුව.*\n").unwrap());

fn remove_headers_footers(input: &str) -> String {
    let s = RE_DEBATE_BANNER.replace_all(input, "");
    RE_GOVERNMENT_TITLE.replace_all(&s, "").into_owned()
}

// ── Pass 2: Strip page-number lines ──────────────────────────────────────────
//
// Known over-match: a legitimate standalone number (a division count, a bill
// number on its own line) is indistinguishable from a page number here and is
// removed too.

static RE_PAGE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\d+\s*\n").unwrap());

fn strip_page_numbers(input: &str) -> String {
    RE_PAGE_NUMBER_LINE.replace_all(input, "\n").into_owned()
}

// ── Pass 3: Remove OCR artifacts ─────────────────────────────────────────────
//
// Allow-list: Sinhala (U+0D80–U+0DFF), Tamil (U+0B80–U+0BFF), Latin letters,
// whitespace, and the punctuation set . , ! ? ( ) " ' -
// Everything else is dropped, silently and irreversibly. Digits and
// combining marks outside the two script blocks (including ZWJ) go with it.

static RE_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\u{0D80}-\u{0DFF}\u{0B80}-\u{0BFF}A-Za-z\s.,!?()"'-]"#).unwrap());

fn remove_ocr_artifacts(input: &str) -> String {
    RE_ARTIFACT.replace_all(input, "").into_owned()
}

// ── Pass 4: Normalise whitespace ─────────────────────────────────────────────

/// Runs of horizontal whitespace (spaces, tabs, CR — anything but `\n`).
static RE_HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Spaces hugging a line break, on either side.
static RE_NEWLINE_EDGES: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());

/// Three or more consecutive newlines — more than one blank line.
static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

fn normalize_whitespace(input: &str) -> String {
    let s = RE_HORIZONTAL_WS.replace_all(input, " ");
    let s = RE_NEWLINE_EDGES.replace_all(&s, "\n");
    let s = RE_BLANK_RUNS.replace_all(&s, "\n\n");
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The character test mirroring the artifact allow-list.
    fn is_allowed(c: char) -> bool {
        ('\u{0D80}'..='\u{0DFF}').contains(&c)
            || ('\u{0B80}'..='\u{0BFF}').contains(&c)
            || c.is_ascii_alphabetic()
            || c.is_whitespace()
            || ".,!?()\"'-".contains(c)
    }

    #[test]
    fn banner_and_following_line_removed() {
        let input = "පාර්ලිමේන්තු විවාද\n2023-05-10\nගරු කථානායකතුමා\n";
        let result = remove_headers_footers(input);
        assert!(!result.contains("විවාද"));
        assert!(!result.contains("2023-05-10"));
        assert!(result.contains("කථානායකතුමා"));
    }

    #[test]
    fn government_title_line_removed() {
        let input = "intro\nසභාව - ශ්‍රී ලංකා ප්‍රජාතාන්ත්‍රික සමාජවාදී ජනරජයේ පාර්ලිමේන්තුව - වෙළුම\nbody\n";
        let result = remove_headers_footers(input);
        assert_eq!(result, "intro\nbody\n");
    }

    #[test]
    fn no_header_is_a_noop() {
        let input = "plain transcript body\n";
        assert_eq!(remove_headers_footers(input), input);
    }

    #[test]
    fn page_number_line_removed() {
        assert_eq!(strip_page_numbers("speech\n42\nmore speech\n"), "speech\nmore speech\n");
        assert_eq!(strip_page_numbers("speech\n  107  \nmore\n"), "speech\nmore\n");
    }

    #[test]
    fn inline_number_survives_page_number_pass() {
        // Only a number alone between newlines is treated as a page number.
        let input = "vote count was\n42 members rose\n";
        assert_eq!(strip_page_numbers(input), input);
    }

    #[test]
    fn artifacts_dropped_scripts_kept() {
        let input = "අද දින© සභාවේ• அவை½ sat.";
        let result = remove_ocr_artifacts(input);
        assert_eq!(result, "අද දින සභාවේ அவை sat.");
    }

    #[test]
    fn digits_are_not_in_the_allow_list() {
        assert_eq!(remove_ocr_artifacts("Act No 19 of 1990"), "Act No  of ");
    }

    #[test]
    fn punctuation_set_survives() {
        let input = r#"Hear, hear! (Interruption) "Order" - won't?"#;
        assert_eq!(remove_ocr_artifacts(input), input);
    }

    #[test]
    fn whitespace_collapsed_to_single_spaces() {
        assert_eq!(normalize_whitespace("a   b\t\tc"), "a b c");
    }

    #[test]
    fn blank_lines_collapse_to_one() {
        assert_eq!(normalize_whitespace("a\n\n\n\n\nb"), "a\n\nb");
        // A single paragraph break is preserved as-is.
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn spaces_around_newlines_stripped() {
        assert_eq!(normalize_whitespace("a  \n   b"), "a\nb");
    }

    #[test]
    fn crlf_input_normalised() {
        assert_eq!(normalize_whitespace("a\r\nb\r\n\r\nc"), "a\nb\n\nc");
    }

    #[test]
    fn leading_and_trailing_whitespace_trimmed() {
        assert_eq!(normalize_whitespace("  \n text \n  "), "text");
    }

    #[test]
    fn cleaned_output_contains_only_allowed_characters() {
        let input = "පාර්ලිමේන්තු විවාද\nvol 12\nඅද © දින\n\n37\n\nஅவை «sat» at 9.30\n";
        let cleaned = clean_text(input);
        for c in cleaned.chars() {
            assert!(is_allowed(c), "disallowed char {c:?} in output: {cleaned:?}");
        }
    }

    #[test]
    fn no_double_spaces_or_double_blank_lines_after_clean() {
        let input = "speech   one\n\n\n\n12\n\n\nspeech two   \n";
        let cleaned = clean_text(input);
        assert!(!cleaned.contains("  "), "double space in {cleaned:?}");
        assert!(!cleaned.contains("\n\n\n"), "double blank line in {cleaned:?}");
        assert_eq!(cleaned, cleaned.trim());
    }

    #[test]
    fn clean_is_idempotent() {
        let inputs = [
            "පාර්ලිමේන්තු විවාද\n2023\nගරු මන්ත්‍රීතුමා කතා කළේය.\n\n14\n\nHear, hear!",
            "plain english  text\twith   mess\n\n\n\nand gaps",
            "தமிழ் உரை\n5\nமுடிந்தது",
        ];
        for input in inputs {
            let once = clean_text(input);
            let twice = clean_text(&once);
            assert_eq!(once, twice, "clean_text not idempotent for {input:?}");
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\n  "), "");
    }
}
