use super::Glyph;
use serde::Serialize;

/// Identifier for "no separator"
pub const NONE_ID: &str = "none";
/// Identifier for free-form user text
pub const CUSTOM_ID: &str = "custom";
/// Identifier for the invisible blank marker
pub const BLANK_ID: &str = "blank";

/// Whether chunks get a suffix only, or a prefix and a suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorMode {
    Single,
    Double,
}

impl SeparatorMode {
    pub fn from_double(double_separator: bool) -> Self {
        if double_separator {
            SeparatorMode::Double
        } else {
            SeparatorMode::Single
        }
    }

    pub fn is_double(self) -> bool {
        self == SeparatorMode::Double
    }
}

/// One selectable separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeparatorEntry {
    /// Stable identifier used for selection
    pub id: &'static str,
    /// Human-readable preview
    pub label: &'static str,
    /// Prefix in double mode
    pub prefix: Glyph,
    /// Suffix in double mode
    pub suffix: Glyph,
    /// The bare token appended as suffix in single mode
    pub token: Glyph,
}

const fn entry(
    id: &'static str,
    label: &'static str,
    prefix: Glyph,
    suffix: Glyph,
    token: Glyph,
) -> SeparatorEntry {
    SeparatorEntry {
        id,
        label,
        prefix,
        suffix,
        token,
    }
}

static SINGLE_SEPARATORS: [SeparatorEntry; 9] = [
    entry(NONE_ID, "(none)", Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY),
    entry(">", "... text >", Glyph::EMPTY, Glyph::literal(">"), Glyph::literal(">")),
    entry("+", "... text +", Glyph::EMPTY, Glyph::literal("+"), Glyph::literal("+")),
    entry("—", "... text —", Glyph::EMPTY, Glyph::literal("—"), Glyph::literal("—")),
    entry("&&.", "... text &&.", Glyph::EMPTY, Glyph::literal("&&."), Glyph::literal("&&.")),
    entry("(+)", "... text (+)", Glyph::EMPTY, Glyph::literal("(+)"), Glyph::literal("(+)")),
    entry(
        "(...)",
        "... text (...)",
        Glyph::EMPTY,
        Glyph::literal("(...)"),
        Glyph::literal("(...)"),
    ),
    entry(BLANK_ID, "... text \u{1160}(blank)", Glyph::EMPTY, Glyph::Blank, Glyph::Blank),
    entry(CUSTOM_ID, "custom", Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY),
];

static DOUBLE_SEPARATORS: [SeparatorEntry; 8] = [
    entry(NONE_ID, "(none)", Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY),
    entry("<>", "< text >", Glyph::literal("<"), Glyph::literal(">"), Glyph::literal("<>")),
    entry("++", "+ text +", Glyph::literal("+"), Glyph::literal("+"), Glyph::literal("++")),
    entry("—", "— text —", Glyph::literal("—"), Glyph::literal("—"), Glyph::literal("—")),
    entry(
        "&&.",
        "&&. text &&.",
        Glyph::literal("&&."),
        Glyph::literal("&&."),
        Glyph::literal("&&."),
    ),
    entry(
        "(...)",
        "(...) text (...)",
        Glyph::literal("(...)"),
        Glyph::literal("(...)"),
        Glyph::literal("(...)"),
    ),
    entry(
        BLANK_ID,
        "\u{1160} text \u{1160}(blank)",
        Glyph::Blank,
        Glyph::Blank,
        Glyph::Blank,
    ),
    entry(CUSTOM_ID, "custom", Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY),
];

/// The fixed single-mode and double-mode separator lists
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorCatalog;

impl SeparatorCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Entries offered in the given mode, in display order
    pub fn entries(&self, mode: SeparatorMode) -> &'static [SeparatorEntry] {
        match mode {
            SeparatorMode::Single => &SINGLE_SEPARATORS,
            SeparatorMode::Double => &DOUBLE_SEPARATORS,
        }
    }

    /// Look up an entry by identifier
    pub fn find(&self, id: &str, mode: SeparatorMode) -> Option<&'static SeparatorEntry> {
        self.entries(mode).iter().find(|e| e.id == id)
    }

    /// The entry selected when nothing else matches
    pub fn default_entry(&self, mode: SeparatorMode) -> &'static SeparatorEntry {
        &self.entries(mode)[0]
    }

    /// Carry a selection over to another mode's list.
    ///
    /// The identifier survives if the other list has it, otherwise the
    /// selection falls back to that list's first entry.
    pub fn reselect(&self, id: &str, mode: SeparatorMode) -> &'static str {
        self.find(id, mode)
            .unwrap_or_else(|| self.default_entry(mode))
            .id
    }

    /// All identifiers offered in a mode
    pub fn ids(&self, mode: SeparatorMode) -> Vec<&'static str> {
        self.entries(mode).iter().map(|e| e.id).collect()
    }
}
