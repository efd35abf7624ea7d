use serde::Serialize;
use std::fmt;

/// A formatted, numbered tweet ready to show or copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tweet {
    /// 1-based position in the thread
    pub index: usize,
    /// Number of tweets in the thread
    pub total: usize,
    /// Decorated text
    pub text: String,
}

impl Tweet {
    pub fn new(index: usize, total: usize, text: String) -> Self {
        Self { index, total, text }
    }

    /// Heading shown above the tweet, e.g. `Tweet 2 / 5`
    pub fn label(&self) -> String {
        format!("Tweet {} / {}", self.index, self.total)
    }

    /// Text to place on the clipboard. Same bytes as the display text.
    pub fn copy_text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.label(), self.text)
    }
}
