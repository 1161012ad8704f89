use narrata::processing::chunking::chunk_text;
use narrata::processing::summarize::summarize_heuristic;
use narrata::processing::truncate::{ELLIPSIS, char_len, truncate_to_boundary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn chunks_partition_the_input(text in "\\PC{0,400}", size in 1usize..64) {
        let chunks: Vec<&str> = chunk_text(&text, size).expect("chunks").collect();
        prop_assert_eq!(chunks.concat(), text.clone());
        prop_assert_eq!(chunks.len(), char_len(&text).div_ceil(size));
        if let Some((last, rest)) = chunks.split_last() {
            for chunk in rest {
                prop_assert_eq!(char_len(chunk), size);
            }
            prop_assert!(char_len(last) >= 1 && char_len(last) <= size);
        }
    }

    #[test]
    fn truncation_never_exceeds_limit_plus_marker(text in "\\PC{0,300}", limit in 0usize..200) {
        let truncated = truncate_to_boundary(&text, limit);
        prop_assert!(char_len(&truncated) <= limit + ELLIPSIS.len());
        if char_len(&text) <= limit {
            prop_assert_eq!(truncated, text);
        } else {
            prop_assert!(truncated.ends_with(ELLIPSIS));
        }
    }

    #[test]
    fn heuristic_output_is_bounded_and_non_empty(
        text in "[A-Za-z][A-Za-z .!?]{0,600}",
        max_chars in 10usize..400,
    ) {
        let summary = summarize_heuristic(&text, max_chars);
        prop_assert!(!summary.is_empty());
        prop_assert!(char_len(&summary) <= max_chars + ELLIPSIS.len());
    }
}
