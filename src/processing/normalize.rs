//! Cleanup of raw extracted text before summarization.
//!
//! The pass is heuristic and intentionally conservative: it drops page furniture (page numbers,
//! short running headers), repairs words hyphenated across line breaks, re-wraps continuation
//! lines, and collapses horizontal whitespace. Paragraphs in the output are separated by a
//! blank line. Short real content can be lost to the header filter; that is accepted.

use regex::Regex;
use std::sync::LazyLock;

static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,4}$").expect("valid page-number pattern"));
static PAGE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:page|p\.)\s*[0-9]{1,4}(?:\s*(?i:of|/)\s*[0-9]{1,4})?$")
        .expect("valid page-label pattern")
});
static SHORT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,3}$").expect("valid header pattern"));
static HORIZONTAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid whitespace pattern"));

/// Separator placed between paragraphs of cleaned text.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Clean raw document text. Never fails; empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines = unified
        .split('\n')
        .map(str::trim)
        .filter(|line| !is_page_furniture(line));

    let paragraphs = rejoin_lines(lines);
    let joined = paragraphs
        .iter()
        .map(|paragraph| paragraph.trim())
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK);

    HORIZONTAL_RUN.replace_all(&joined, " ").trim().to_string()
}

/// Lines treated as page numbers or running headers/footers.
fn is_page_furniture(line: &str) -> bool {
    PAGE_NUMBER.is_match(line) || PAGE_LABEL.is_match(line) || SHORT_TOKEN.is_match(line)
}

/// Reassemble trimmed lines into paragraphs.
///
/// A trailing hyphen glues the next line on without the hyphen, a lowercase start continues the
/// previous line, an empty line opens an empty paragraph marker, anything else starts a new
/// paragraph.
fn rejoin_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for line in lines {
        let Some(previous) = parts.last_mut() else {
            parts.push(line.to_string());
            continue;
        };

        if previous.ends_with('-') {
            previous.pop();
            previous.push_str(line);
        } else if line.is_empty() {
            parts.push(String::new());
        } else if line.chars().next().is_some_and(char::is_lowercase) {
            previous.push(' ');
            previous.push_str(line);
        } else {
            parts.push(line.to_string());
        }
    }
    parts
}
