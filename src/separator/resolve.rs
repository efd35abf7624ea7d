use super::catalog::{CUSTOM_ID, NONE_ID, SeparatorCatalog, SeparatorMode};
use super::{Glyph, SeparatorSpec};

/// Turn a selected identifier into the prefix/suffix pair to apply.
///
/// - `none` gives an empty pair
/// - `custom` uses the trimmed custom text as suffix, and as prefix too in
///   double mode
/// - catalog entries use their declared pair in double mode; single mode
///   always appends the entry's bare token as suffix
///
/// Unknown identifiers resolve like the mode's first entry.
pub fn resolve_separator(
    selection: &str,
    custom_text: &str,
    double_separator: bool,
) -> SeparatorSpec {
    let mode = SeparatorMode::from_double(double_separator);
    SeparatorCatalog::new().resolve(selection, custom_text, mode)
}

impl SeparatorCatalog {
    /// Resolve a selection against this catalog in the given mode
    pub fn resolve(
        &self,
        selection: &str,
        custom_text: &str,
        mode: SeparatorMode,
    ) -> SeparatorSpec {
        match selection {
            NONE_ID => SeparatorSpec::none(),
            CUSTOM_ID => {
                let custom = Glyph::custom(custom_text.trim());
                if mode.is_double() {
                    SeparatorSpec::new(custom.clone(), custom)
                } else {
                    SeparatorSpec::suffix_only(custom)
                }
            }
            id => {
                let entry = self
                    .find(id, mode)
                    .unwrap_or_else(|| self.default_entry(mode));
                if mode.is_double() {
                    SeparatorSpec::new(entry.prefix.clone(), entry.suffix.clone())
                } else {
                    SeparatorSpec::suffix_only(entry.token.clone())
                }
            }
        }
    }
}
