//! Property-based tests for the chunker.
//!
//! - Chunks are never blank and carry no edge whitespace
//! - Chunks plus the whitespace between them rebuild the trimmed input
//! - Boundaries never fall inside a non-whitespace run

use proptest::prelude::*;

use super::{ChunkBudget, is_space, split_into_chunks, trim_spaces};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9]{1,12}",
            "[éüñ漢字]{1,6}",
            "x{30,80}",
            "[ \t\n\u{feff}\u{3000}]{1,4}",
        ],
        0..120,
    )
    .prop_map(|parts| parts.concat())
}

fn budget_strategy() -> impl Strategy<Value = ChunkBudget> {
    (20usize..300, 0usize..15).prop_map(|(max, margin)| ChunkBudget::new(max, margin))
}

proptest! {
    /// Non-blank input yields at least one chunk and every chunk is trimmed.
    #[test]
    fn chunks_are_non_empty_and_trimmed(
        text in text_strategy(),
        budget in budget_strategy(),
        double in any::<bool>(),
    ) {
        let chunks = split_into_chunks(&text, budget, double);
        prop_assert_eq!(chunks.is_empty(), trim_spaces(&text).is_empty());
        for chunk in &chunks {
            prop_assert!(!chunk.text.is_empty());
            prop_assert_eq!(trim_spaces(&chunk.text), chunk.text.as_str());
        }
    }

    /// Gaps between chunks are pure whitespace and nothing else is dropped.
    #[test]
    fn chunks_rebuild_trimmed_input(
        text in text_strategy(),
        budget in budget_strategy(),
        double in any::<bool>(),
    ) {
        let trimmed = trim_spaces(&text);
        let chunks = split_into_chunks(&text, budget, double);

        let mut rebuilt = String::new();
        let mut cursor = 0;
        for chunk in &chunks {
            let gap = &trimmed[cursor..chunk.metadata.start_offset];
            prop_assert!(gap.chars().all(is_space));
            if cursor == 0 {
                prop_assert!(gap.is_empty());
            }
            rebuilt.push_str(gap);
            rebuilt.push_str(&chunk.text);
            prop_assert_eq!(
                &trimmed[chunk.metadata.start_offset..chunk.metadata.end_offset],
                chunk.text.as_str()
            );
            cursor = chunk.metadata.end_offset;
        }
        prop_assert_eq!(rebuilt.as_str(), &trimmed[..cursor]);
        prop_assert_eq!(cursor, trimmed.len());
    }

    /// Every boundary sits next to whitespace, so no word is split.
    #[test]
    fn boundaries_respect_words(
        text in text_strategy(),
        budget in budget_strategy(),
        double in any::<bool>(),
    ) {
        let trimmed = trim_spaces(&text);
        let chunks = split_into_chunks(&text, budget, double);
        for pair in chunks.windows(2) {
            let gap = &trimmed[pair[0].metadata.end_offset..pair[1].metadata.start_offset];
            prop_assert!(!gap.is_empty());
        }
    }

    /// Multi-word chunks stay within the estimated budget.
    #[test]
    fn multi_word_chunks_fit_budget(
        text in text_strategy(),
        budget in budget_strategy(),
        double in any::<bool>(),
    ) {
        for chunk in split_into_chunks(&text, budget, double) {
            if chunk.metadata.word_count > 1 {
                prop_assert!(!budget.exceeds(chunk.metadata.char_count, double));
            }
        }
    }
}
