mod catalog;
mod glyph;
mod resolve;


pub use catalog::{
    BLANK_ID, CUSTOM_ID, NONE_ID, SeparatorCatalog, SeparatorEntry, SeparatorMode,
};
pub use glyph::{BLANK_MARKER, Glyph, SeparatorSpec};
pub use resolve::resolve_separator;
