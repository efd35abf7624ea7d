use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Invisible continuation glyph (U+1160 HANGUL JUNGSEONG FILLER)
pub const BLANK_MARKER: &str = "\u{1160}";

/// Text placed before or after a chunk
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The reserved invisible marker from the catalog
    Blank,
    /// Literal separator text, possibly empty
    Text(Cow<'static, str>),
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph::Text(Cow::Borrowed(""));

    pub const fn literal(text: &'static str) -> Self {
        Glyph::Text(Cow::Borrowed(text))
    }

    /// Owned user text. Never becomes `Blank`, even if it spells the marker.
    pub fn custom(text: impl Into<String>) -> Self {
        Glyph::Text(Cow::Owned(text.into()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Glyph::Blank => BLANK_MARKER,
            Glyph::Text(text) => &**text,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Glyph::Blank)
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::EMPTY
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Prefix and suffix applied around each chunk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeparatorSpec {
    pub prefix: Glyph,
    pub suffix: Glyph,
}

impl SeparatorSpec {
    pub fn new(prefix: Glyph, suffix: Glyph) -> Self {
        Self { prefix, suffix }
    }

    /// No decoration at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Only a trailing suffix
    pub fn suffix_only(suffix: Glyph) -> Self {
        Self::new(Glyph::EMPTY, suffix)
    }

    /// Both sides carry the catalog's blank marker
    pub fn is_blank_marker(&self) -> bool {
        self.prefix.is_blank() && self.suffix.is_blank()
    }
}
