use super::{FormatConfig, SpecialFormat};
use crate::separator::SeparatorSpec;
use serde::Serialize;

/// Where a chunk sits in the thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Sole chunk: both first and last
    Only,
    First,
    Middle,
    Last,
}

impl Position {
    pub fn of(index: usize, len: usize) -> Self {
        match (index == 0, index + 1 >= len) {
            (true, true) => Position::Only,
            (true, false) => Position::First,
            (false, true) => Position::Last,
            (false, false) => Position::Middle,
        }
    }

    /// Double-separator layouts: a sole chunk counts as first
    pub fn is_first(self) -> bool {
        matches!(self, Position::Only | Position::First)
    }

    /// Suffix-only layout: a sole chunk counts as last
    pub fn is_last(self) -> bool {
        matches!(self, Position::Only | Position::Last)
    }
}

/// Decorate one chunk according to its position.
///
/// Rows are checked in order, first match wins:
/// - blank marker on both sides, double separator and double spacing: the
///   special format, identical at every position
/// - double separator, double spacing: separators joined by a blank line
/// - double separator: separators joined by a space
/// - single separator: `chunk suffix`, except the last chunk is bare
///
/// In the double rows the first chunk has no prefix and the last no suffix.
pub fn format_chunk(
    chunk: &str,
    position: Position,
    config: &FormatConfig,
    separator: &SeparatorSpec,
) -> String {
    let prefix = separator.prefix.as_str();
    let suffix = separator.suffix.as_str();

    if !config.double_separator {
        return if position.is_last() {
            chunk.to_string()
        } else {
            format!("{chunk} {suffix}")
        };
    }

    if config.double_spacing && separator.is_blank_marker() {
        return match config.special_format {
            SpecialFormat::Tight => format!("{prefix}\n{chunk}\n{suffix}"),
            SpecialFormat::Spaced => format!("{prefix}\n\n{chunk}\n\n{suffix}"),
        };
    }

    let gap = if config.double_spacing { "\n\n" } else { " " };
    match position {
        Position::Only | Position::First => format!("{chunk}{gap}{suffix}"),
        Position::Middle => format!("{prefix}{gap}{chunk}{gap}{suffix}"),
        Position::Last => format!("{prefix}{gap}{chunk}"),
    }
}

/// Decorate every chunk. Display and copy both go through here, so the two
/// always agree byte for byte.
pub fn format<S: AsRef<str>>(
    chunks: &[S],
    config: &FormatConfig,
    separator: &SeparatorSpec,
) -> Vec<String> {
    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            format_chunk(
                chunk.as_ref(),
                Position::of(index, chunks.len()),
                config,
                separator,
            )
        })
        .collect()
}
