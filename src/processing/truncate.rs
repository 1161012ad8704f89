//! Word-boundary truncation with an explicit continuation marker.

/// Marker appended when a summary is cut short.
pub const ELLIPSIS: &str = "...";

/// Count characters the way every length bound in the pipeline does.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncate `text` to at most `limit` characters, cutting at the last whitespace before the
/// limit and appending [`ELLIPSIS`].
///
/// Text already within the limit is returned unchanged. The result never exceeds
/// `limit + ELLIPSIS.len()` characters. Without any whitespace to cut at, the hard prefix is
/// kept.
pub fn truncate_to_boundary(text: &str, limit: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(limit) else {
        return text.to_string();
    };
    let head = &text[..cut];
    let kept = match head.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 => head[..boundary].trim_end(),
        _ => head,
    };
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_to_boundary("Hello world.", 12), "Hello world.");
        assert_eq!(truncate_to_boundary("", 0), "");
    }

    #[test]
    fn long_text_is_cut_at_last_space() {
        assert_eq!(
            truncate_to_boundary("The quick brown fox jumps", 13),
            "The quick..."
        );
    }

    #[test]
    fn repeated_whitespace_before_cut_is_trimmed() {
        assert_eq!(truncate_to_boundary("alpha  beta gamma", 8), "alpha...");
    }

    #[test]
    fn text_without_whitespace_keeps_hard_prefix() {
        assert_eq!(truncate_to_boundary("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn limit_counts_characters() {
        let truncated = truncate_to_boundary("ééé ééé ééé", 9);
        assert_eq!(truncated, "ééé ééé...");
        assert!(char_len(&truncated) <= 9 + ELLIPSIS.len());
    }

    #[test]
    fn output_never_exceeds_limit_plus_marker() {
        let text = "word ".repeat(400);
        for limit in [0, 1, 5, 17, 250, 1999] {
            let truncated = truncate_to_boundary(&text, limit);
            assert!(char_len(&truncated) <= limit + ELLIPSIS.len());
            assert!(truncated.ends_with(ELLIPSIS));
        }
    }
}
