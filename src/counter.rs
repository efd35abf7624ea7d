use crate::chunker::{trim_spaces, words};
use serde::Serialize;
use std::fmt;

/// Word and character totals for the raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextCounts {
    pub words: usize,
    pub characters: usize,
}

impl TextCounts {
    /// Count the trimmed input: words are non-empty whitespace-delimited runs
    pub fn of(text: &str) -> Self {
        let text = trim_spaces(text);
        Self {
            words: words(text).count(),
            characters: text.chars().count(),
        }
    }
}

impl fmt::Display for TextCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Words: {} | Characters: {}", self.words, self.characters)
    }
}
