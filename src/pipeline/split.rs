//! Page splitting: segment concatenated OCR text on `--- Page N ---` markers.
//!
//! Batch OCR jobs concatenate a whole volume into one file, inserting a
//! marker line before each page's text. A page's raw content is the span
//! from just after its marker to just before the next marker (or the end of
//! the text), trimmed.
//!
//! The captured page number is kept as the literal marker *string*, not
//! parsed: ordering and uniqueness are whatever the source order is. A
//! duplicated or out-of-order marker in the scan shows up as-is in the
//! output file names rather than being silently renumbered.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*---[ \t]*Page[ \t]+(\d+)[ \t]*---[ \t]*$").unwrap());

/// One page segment: the marker's number string and the raw text that
/// followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// The digits captured from the marker, verbatim.
    pub number: String,
    /// The page's raw (uncleaned) content, trimmed.
    pub text: String,
}

/// Split `text` on `--- Page N ---` marker lines.
///
/// Returns one [`RawPage`] per marker, in source order. Text before the
/// first marker is ignored; zero markers yields an empty vector.
pub fn split_pages(text: &str) -> Vec<RawPage> {
    let markers: Vec<(usize, usize, String)> = RE_PAGE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some((m.start(), m.end(), caps[1].to_string()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, (_, end, number))| {
            let content_end = markers.get(i + 1).map_or(text.len(), |next| next.0);
            RawPage {
                number: number.clone(),
                text: text[*end..content_end].trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pages_split_cleanly() {
        let text = "--- Page 1 ---\ncontent A\n--- Page 2 ---\ncontent B\n";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], RawPage { number: "1".into(), text: "content A".into() });
        assert_eq!(pages[1], RawPage { number: "2".into(), text: "content B".into() });
    }

    #[test]
    fn last_page_runs_to_end_of_text() {
        let text = "--- Page 7 ---\nfinal words";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, "7");
        assert_eq!(pages[0].text, "final words");
    }

    #[test]
    fn no_markers_yields_empty() {
        assert!(split_pages("just ordinary text\nwith lines").is_empty());
        assert!(split_pages("").is_empty());
    }

    #[test]
    fn preamble_before_first_marker_is_ignored() {
        let text = "OCR job header\n--- Page 1 ---\nbody";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "body");
    }

    #[test]
    fn marker_must_fill_its_line() {
        // An inline mention of a marker is content, not a boundary.
        let text = "--- Page 1 ---\nsee --- Page 2 --- above\nstill page one";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.contains("still page one"));
    }

    #[test]
    fn page_numbers_kept_verbatim_no_dedup_or_sort() {
        let text = "--- Page 03 ---\na\n--- Page 1 ---\nb\n--- Page 03 ---\nc";
        let numbers: Vec<String> = split_pages(text).into_iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec!["03", "1", "03"]);
    }

    #[test]
    fn marker_tolerates_surrounding_blanks() {
        let text = "  ---  Page 5  ---  \ncontent";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, "5");
    }

    #[test]
    fn empty_page_content_is_empty_string() {
        let text = "--- Page 1 ---\n--- Page 2 ---\nb";
        let pages = split_pages(text);
        assert_eq!(pages[0].text, "");
        assert_eq!(pages[1].text, "b");
    }
}
