//! Dependency-free fallback: the opening sentences of the document.

use crate::processing::truncate::truncate_to_boundary;
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading sentences kept by the heuristic tier.
pub const HEURISTIC_SENTENCES: usize = 3;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary pattern"));

/// Split on `.`, `!`, or `?` followed by whitespace, keeping the punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(text) {
        // The terminator is a single ASCII byte.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// First [`HEURISTIC_SENTENCES`] sentences joined by spaces, capped at `max_chars`.
///
/// Never fails. Input with any non-whitespace character yields a non-empty result; blank input
/// counts as empty and yields an empty string.
pub fn summarize_heuristic(text: &str, max_chars: usize) -> String {
    let summary = split_sentences(text)
        .into_iter()
        .take(HEURISTIC_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");
    truncate_to_boundary(&summary, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::truncate::{ELLIPSIS, char_len};

    #[test]
    fn splits_on_terminal_punctuation_followed_by_whitespace() {
        assert_eq!(
            split_sentences("One. Two!  Three?\nFour 3.5 stays."),
            vec!["One.", "Two!", "Three?", "Four 3.5 stays."]
        );
    }

    #[test]
    fn keeps_first_three_sentences() {
        let summary = summarize_heuristic("A one. B two. C three. D four.", 2000);
        assert_eq!(summary, "A one. B two. C three.");
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert_eq!(summarize_heuristic("", 2000), "");
    }

    #[test]
    fn whitespace_only_input_counts_as_empty() {
        assert_eq!(summarize_heuristic("   \n\t ", 2000), "");
        assert_eq!(summarize_heuristic("  x  ", 2000), "x");
    }

    #[test]
    fn lone_punctuation_still_produces_output() {
        assert_eq!(summarize_heuristic("?", 2000), "?");
        assert!(!summarize_heuristic("no terminator here", 2000).is_empty());
    }

    #[test]
    fn long_sentences_are_truncated_with_marker() {
        let text = format!("{} end.", "word ".repeat(1000));
        let summary = summarize_heuristic(&text, 100);
        assert!(summary.ends_with(ELLIPSIS));
        assert!(char_len(&summary) <= 100 + ELLIPSIS.len());
    }
}
