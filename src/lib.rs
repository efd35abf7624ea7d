// Public API exports
pub mod chunker;
pub mod config;
pub mod counter;
pub mod error;
pub mod formatter;
pub mod separator;
pub mod session;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkBudget, ChunkMetadata, DEFAULT_MAX_LENGTH, DEFAULT_RESERVED_MARGIN, chunk,
    split_into_chunks,
};

pub use formatter::{FormatConfig, Position, SpecialFormat, format, format_chunk};

pub use separator::{
    BLANK_MARKER, Glyph, SeparatorCatalog, SeparatorEntry, SeparatorMode, SeparatorSpec,
    resolve_separator,
};

pub use config::Settings;
pub use counter::TextCounts;
pub use error::SplitError;
pub use session::{SplitSession, Tweet};
