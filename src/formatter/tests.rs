use super::*;
use crate::separator::{Glyph, SeparatorSpec, resolve_separator};
use pretty_assertions::assert_eq;

fn config(double_separator: bool, double_spacing: bool) -> FormatConfig {
    FormatConfig {
        double_separator,
        double_spacing,
        special_format: SpecialFormat::Tight,
    }
}

fn angle() -> SeparatorSpec {
    SeparatorSpec::new(Glyph::literal("<"), Glyph::literal(">"))
}

fn blank() -> SeparatorSpec {
    SeparatorSpec::new(Glyph::Blank, Glyph::Blank)
}

const ABC: [&str; 3] = ["a", "b", "c"];

#[test]
fn test_position_of() {
    assert_eq!(Position::of(0, 1), Position::Only);
    assert_eq!(Position::of(0, 3), Position::First);
    assert_eq!(Position::of(1, 3), Position::Middle);
    assert_eq!(Position::of(2, 3), Position::Last);
    assert!(Position::Only.is_first());
    assert!(Position::Only.is_last());
}

#[test]
fn test_double_separator_double_spacing() {
    let out = format(&ABC, &config(true, true), &angle());
    assert_eq!(out, vec!["a\n\n>", "<\n\nb\n\n>", "<\n\nc"]);
}

#[test]
fn test_double_separator_single_spacing() {
    let out = format(&ABC, &config(true, false), &angle());
    assert_eq!(out, vec!["a >", "< b >", "< c"]);
}

#[test]
fn test_single_separator() {
    let spec = SeparatorSpec::suffix_only(Glyph::literal("+"));
    let out = format(&ABC, &config(false, false), &spec);
    assert_eq!(out, vec!["a +", "b +", "c"]);

    // Spacing has no effect without a prefix
    let spaced = format(&ABC, &config(false, true), &spec);
    assert_eq!(spaced, out);
}

#[test]
fn test_single_chunk_suffix_only_is_unchanged() {
    let spec = SeparatorSpec::suffix_only(Glyph::literal("+"));
    let out = format(&["only chunk"], &config(false, false), &spec);
    assert_eq!(out, vec!["only chunk"]);
}

#[test]
fn test_single_chunk_double_uses_first_layout() {
    let out = format(&["solo"], &config(true, true), &angle());
    assert_eq!(out, vec!["solo\n\n>"]);

    let out = format(&["solo"], &config(true, false), &angle());
    assert_eq!(out, vec!["solo >"]);
}

#[test]
fn test_two_chunks_double() {
    let out = format(&["x", "y"], &config(true, false), &angle());
    assert_eq!(out, vec!["x >", "< y"]);
}

#[test]
fn test_special_format_tight_ignores_position() {
    let marker = Glyph::Blank.to_string();
    let out = format(&ABC, &config(true, true), &blank());
    for (text, chunk) in out.iter().zip(ABC) {
        assert_eq!(text, &format!("{marker}\n{chunk}\n{marker}"));
    }
}

#[test]
fn test_special_format_spaced() {
    let mut cfg = config(true, true);
    cfg.special_format = SpecialFormat::Spaced;
    let marker = Glyph::Blank.to_string();

    let out = format(&["a", "b"], &cfg, &blank());
    assert_eq!(out[0], format!("{marker}\n\na\n\n{marker}"));
    assert_eq!(out[1], format!("{marker}\n\nb\n\n{marker}"));
}

#[test]
fn test_blank_marker_without_double_spacing_is_positional() {
    let marker = Glyph::Blank.to_string();
    let out = format(&["a", "b"], &config(true, false), &blank());
    assert_eq!(out, vec![format!("a {marker}"), format!("{marker} b")]);
}

#[test]
fn test_custom_marker_text_gets_positional_layout() {
    let spec = resolve_separator("custom", crate::separator::BLANK_MARKER, true);
    let marker = crate::separator::BLANK_MARKER;
    let out = format(&["a", "b"], &config(true, true), &spec);
    assert_eq!(out, vec![format!("a\n\n{marker}"), format!("{marker}\n\nb")]);
}

#[test]
fn test_empty_chunk_list() {
    let out = format::<&str>(&[], &config(true, true), &angle());
    assert!(out.is_empty());
}

#[test]
fn test_special_format_try_from() {
    assert_eq!(SpecialFormat::try_from(1u8).unwrap(), SpecialFormat::Tight);
    assert_eq!(SpecialFormat::try_from(2u8).unwrap(), SpecialFormat::Spaced);
    assert!(SpecialFormat::try_from(0u8).is_err());
    assert_eq!(u8::from(SpecialFormat::Spaced), 2);
}

#[test]
fn test_special_format_serde() {
    let cfg: FormatConfig = serde_json::from_str(
        r#"{"double_separator":true,"double_spacing":true,"special_format":2}"#,
    )
    .unwrap();
    assert_eq!(cfg.special_format, SpecialFormat::Spaced);
    assert!(serde_json::from_str::<SpecialFormat>("7").is_err());
}

#[test]
fn test_special_format_available() {
    assert!(config(true, true).special_format_available("blank"));
    assert!(!config(true, false).special_format_available("blank"));
    assert!(!config(false, true).special_format_available("blank"));
    assert!(!config(true, true).special_format_available("custom"));
}
