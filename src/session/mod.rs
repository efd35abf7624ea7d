mod tweet;


pub use tweet::Tweet;

use crate::chunker::{ChunkBudget, split_into_chunks};
use crate::counter::TextCounts;
use crate::formatter::{FormatConfig, SpecialFormat, format};
use crate::separator::{CUSTOM_ID, NONE_ID, SeparatorCatalog, SeparatorSpec};
use tracing::debug;

/// Owns the editable state of a split and recomputes tweets on demand.
///
/// Nothing is cached: every call to [`SplitSession::tweets`] chunks and
/// formats the current text from scratch.
#[derive(Debug, Clone)]
pub struct SplitSession {
    catalog: SeparatorCatalog,
    text: String,
    selection: &'static str,
    custom_text: String,
    config: FormatConfig,
    budget: ChunkBudget,
}

impl SplitSession {
    /// Empty text, no separator, single mode, default budget
    pub fn new() -> Self {
        Self {
            catalog: SeparatorCatalog::new(),
            text: String::new(),
            selection: NONE_ID,
            custom_text: String::new(),
            config: FormatConfig::default(),
            budget: ChunkBudget::default(),
        }
    }

    pub fn with_budget(mut self, budget: ChunkBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Select a separator by identifier.
    ///
    /// Identifiers missing from the current mode's list select its first entry.
    pub fn select_separator(&mut self, id: &str) {
        self.selection = self.catalog.reselect(id, self.config.mode());
    }

    /// Update the free-form separator text. Kept across mode switches.
    pub fn set_custom_text(&mut self, text: impl Into<String>) {
        self.custom_text = text.into();
    }

    /// Switch between suffix-only and prefix+suffix mode, carrying the current
    /// selection over to the other catalog list
    pub fn set_double_separator(&mut self, double_separator: bool) {
        self.config.double_separator = double_separator;
        let selection = self.catalog.reselect(self.selection, self.config.mode());
        if selection != self.selection {
            debug!(from = self.selection, to = selection, "separator not offered in new mode");
        }
        self.selection = selection;
    }

    pub fn set_double_spacing(&mut self, double_spacing: bool) {
        self.config.double_spacing = double_spacing;
    }

    pub fn set_special_format(&mut self, special_format: SpecialFormat) {
        self.config.special_format = special_format;
    }

    pub fn set_budget(&mut self, budget: ChunkBudget) {
        self.budget = budget;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> &'static str {
        self.selection
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn budget(&self) -> ChunkBudget {
        self.budget
    }

    pub fn catalog(&self) -> &SeparatorCatalog {
        &self.catalog
    }

    /// Whether the free-form separator input is in use
    pub fn custom_input_visible(&self) -> bool {
        self.selection == CUSTOM_ID
    }

    /// Whether the blank-marker layout choice applies
    pub fn special_format_available(&self) -> bool {
        self.config.special_format_available(self.selection)
    }

    /// Prefix and suffix for the current selection
    pub fn separator(&self) -> SeparatorSpec {
        self.catalog.resolve(self.selection, &self.custom_text, self.config.mode())
    }

    pub fn counts(&self) -> TextCounts {
        TextCounts::of(&self.text)
    }

    /// Chunk and decorate the current text
    pub fn tweets(&self) -> Vec<Tweet> {
        let chunks = split_into_chunks(&self.text, self.budget, self.config.double_separator);
        let separator = self.separator();
        let total = chunks.len();

        debug!(
            selection = self.selection,
            double_separator = self.config.double_separator,
            double_spacing = self.config.double_spacing,
            total,
            "formatting tweets"
        );

        format(&chunks, &self.config, &separator)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Tweet::new(index + 1, total, text))
            .collect()
    }
}

impl Default for SplitSession {
    fn default() -> Self {
        Self::new()
    }
}
