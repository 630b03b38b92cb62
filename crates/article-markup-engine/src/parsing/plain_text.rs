//! # Plain-Text Extractor
//!
//! Flattens an article body into one line of text for summaries and page
//! metadata. This is an approximation built from ordered regex substitutions;
//! it does not share the block assembler's tree.

use std::sync::OnceLock;

use regex::Regex;

use super::inline::kinds::{Bold, Link};

/// Suffix appended by [`summarize`] when it shortens the text.
pub const ELLIPSIS: &str = "...";

fn heading_marker_regex() -> &'static Regex {
    static HEADING_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_MARKER_REGEX
        .get_or_init(|| Regex::new(r"(?m)^#{1,6} ").expect("Invalid heading marker regex"))
}

fn list_marker_regex() -> &'static Regex {
    static LIST_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER_REGEX.get_or_init(|| Regex::new(r"(?m)^- ").expect("Invalid list marker regex"))
}

fn blank_run_regex() -> &'static Regex {
    static BLANK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN_REGEX.get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid blank run regex"))
}

fn newline_regex() -> &'static Regex {
    static NEWLINE_REGEX: OnceLock<Regex> = OnceLock::new();
    NEWLINE_REGEX.get_or_init(|| Regex::new(r"\r?\n").expect("Invalid newline regex"))
}

/// Strips all markup from `raw`, returning a single line of text.
///
/// Steps, each applied once over the whole document in this order:
/// heading markers, bold, links (target dropped), list markers, runs of
/// newlines, single newlines, then trimming. The result never contains `\n`.
///
/// Literal `#`, `**`, `[..](..)` or `- ` that an author meant as prose are
/// stripped too.
pub fn extract_plain_text(raw: &str) -> String {
    let text = heading_marker_regex().replace_all(raw, "");
    let text = Bold::regex().replace_all(&text, "$1");
    let text = Link::regex().replace_all(&text, "$1");
    let text = list_marker_regex().replace_all(&text, "");
    let text = blank_run_regex().replace_all(&text, " ");
    let text = newline_regex().replace_all(&text, " ");
    text.trim().to_string()
}

/// Extracts plain text and shortens it to at most `max_len` characters.
///
/// Truncation is the caller-side step that follows [`extract_plain_text`]:
/// it counts characters (never splitting one), trims trailing whitespace at
/// the cut and appends [`ELLIPSIS`]. The ellipsis is not counted against
/// `max_len`. `None` disables truncation.
pub fn summarize(raw: &str, max_len: Option<usize>) -> String {
    let text = extract_plain_text(raw);
    match max_len {
        Some(max) => truncate_chars(&text, max),
        None => text,
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max) else {
        return text.to_string();
    };
    let mut out = text[..cut].trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}
