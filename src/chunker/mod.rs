mod splitter;
mod tokens;

#[cfg(test)]
mod proptests;

pub use splitter::{Chunk, ChunkMetadata, chunk, split_into_chunks};
pub use tokens::{Token, is_space, tokenize, trim_spaces, words};

/// Platform length limit per tweet
pub const DEFAULT_MAX_LENGTH: usize = 280;

/// Characters held back for separator text appended after chunking
pub const DEFAULT_RESERVED_MARGIN: usize = 10;

/// Length budget applied while accumulating chunk text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBudget {
    /// Upper bound on a formatted tweet, in characters
    pub max_length: usize,
    /// Allowance for prefix/suffix text not yet appended
    pub reserved_margin: usize,
}

impl ChunkBudget {
    pub fn new(max_length: usize, reserved_margin: usize) -> Self {
        Self {
            max_length,
            reserved_margin,
        }
    }

    /// Estimated final length of a buffer holding `chars` characters.
    ///
    /// Single-separator mode adds one more character for the space that joins
    /// the chunk to its trailing suffix.
    pub fn estimate(&self, chars: usize, double_separator: bool) -> usize {
        chars
            .saturating_add(usize::from(!double_separator))
            .saturating_add(self.reserved_margin)
    }

    /// Whether a buffer of `chars` characters would overflow the limit
    pub fn exceeds(&self, chars: usize, double_separator: bool) -> bool {
        self.estimate(chars, double_separator) > self.max_length
    }
}

impl Default for ChunkBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, DEFAULT_RESERVED_MARGIN)
    }
}
