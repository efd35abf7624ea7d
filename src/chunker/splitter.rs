use serde::Serialize;
use tracing::{debug, trace};

use super::ChunkBudget;
use super::tokens::{Token, is_space, tokenize, trim_spaces, words};

/// One tweet-sized piece of the input, before separators are applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Chunk text, trailing whitespace removed
    pub text: String,
    /// Where the chunk came from
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkMetadata {
    /// Byte offset in the trimmed input (start)
    pub start_offset: usize,
    /// Byte offset in the trimmed input (end, exclusive)
    pub end_offset: usize,
    /// Length in chars
    pub char_count: usize,
    /// Number of whitespace-delimited words
    pub word_count: usize,
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Contiguous region of the trimmed input being accumulated
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    chars: usize,
}

impl Span {
    fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            chars: 0,
        }
    }

    fn from_token(token: &Token<'_>) -> Self {
        Self {
            start: token.offset,
            end: token.end(),
            chars: token.chars,
        }
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn extend(&mut self, token: &Token<'_>) {
        if self.is_empty() {
            *self = Self::from_token(token);
        } else {
            self.end = token.end();
            self.chars += token.chars;
        }
    }
}

/// Split text into chunks with the default budget in single-separator mode
pub fn chunk(text: &str) -> Vec<Chunk> {
    split_into_chunks(text, ChunkBudget::default(), false)
}

/// Greedily pack word and whitespace runs into chunks.
///
/// Rules:
/// - The input is trimmed; blank input yields no chunks
/// - A token is accepted while the estimated final length stays within budget
/// - On overflow the buffer is closed and the next one starts with the
///   offending token, unless that token is whitespace
/// - Words are never split, so a single word longer than the budget becomes
///   its own oversized chunk
pub fn split_into_chunks(text: &str, budget: ChunkBudget, double_separator: bool) -> Vec<Chunk> {
    let text = trim_spaces(text);
    if text.is_empty() {
        return vec![];
    }

    let mut chunks = Vec::new();
    let mut span = Span::empty_at(0);

    for token in tokenize(text) {
        if budget.exceeds(span.chars + token.chars, double_separator) {
            close_span(text, span, &mut chunks);
            span = if token.is_whitespace {
                Span::empty_at(token.end())
            } else {
                Span::from_token(&token)
            };
        } else {
            span.extend(&token);
        }
    }

    close_span(text, span, &mut chunks);

    debug!(
        input_chars = text.chars().count(),
        chunks = chunks.len(),
        max_length = budget.max_length,
        reserved_margin = budget.reserved_margin,
        double_separator,
        "split input into chunks"
    );

    chunks
}

/// Push the span as a finished chunk if anything but whitespace remains
fn close_span(text: &str, span: Span, chunks: &mut Vec<Chunk>) {
    let slice = text[span.start..span.end].trim_end_matches(is_space);
    if trim_spaces(slice).is_empty() {
        return;
    }

    let char_count = slice.chars().count();
    trace!(index = chunks.len(), char_count, "closing chunk");

    chunks.push(Chunk {
        text: slice.to_string(),
        metadata: ChunkMetadata {
            start_offset: span.start,
            end_offset: span.start + slice.len(),
            char_count,
            word_count: words(slice).count(),
        },
    });
}
