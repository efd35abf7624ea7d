/// A maximal run of either whitespace or non-whitespace characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the run in the tokenized text
    pub offset: usize,
    /// The run itself
    pub text: &'a str,
    /// Number of chars in the run
    pub chars: usize,
    /// Whether the run is whitespace
    pub is_whitespace: bool,
}

impl Token<'_> {
    /// Byte offset just past the end of the run
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Whitespace as text fields treat it: Unicode `White_Space` plus the
/// byte-order mark U+FEFF, minus NEXT LINE U+0085.
pub fn is_space(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        ch => ch.is_whitespace(),
    }
}

/// Trim [`is_space`] characters from both ends
pub fn trim_spaces(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Non-empty runs between [`is_space`] characters
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|word| !word.is_empty())
}

/// Split text into alternating word and whitespace runs.
///
/// Whitespace runs are kept as their own tokens so the exact spacing between
/// words survives chunking. Concatenating the tokens yields the input.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = 0;
    let mut in_whitespace = None;

    for (idx, ch) in text.char_indices() {
        let ws = is_space(ch);
        match in_whitespace {
            Some(current) if current != ws => {
                tokens.push(Token {
                    offset: start,
                    text: &text[start..idx],
                    chars,
                    is_whitespace: current,
                });
                start = idx;
                chars = 0;
            }
            _ => {}
        }
        in_whitespace = Some(ws);
        chars += 1;
    }

    if let Some(ws) = in_whitespace {
        tokens.push(Token {
            offset: start,
            text: &text[start..],
            chars,
            is_whitespace: ws,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_runs() {
        let tokens = tokenize("one  two\n\nthree");
        assert_eq!(texts(&tokens), vec!["one", "  ", "two", "\n\n", "three"]);
        assert!(!tokens[0].is_whitespace);
        assert!(tokens[1].is_whitespace);
        assert_eq!(tokens[2].offset, 5);
        assert_eq!(tokens[4].end(), 15);
    }

    #[test]
    fn test_char_counts_not_bytes() {
        let tokens = tokenize("héllo wörld");
        assert_eq!(tokens[0].chars, 5);
        assert_eq!(tokens[0].text.len(), 6);
        assert_eq!(tokens[2].chars, 5);
    }

    #[test]
    fn test_leading_whitespace_token() {
        let tokens = tokenize(" a");
        assert_eq!(texts(&tokens), vec![" ", "a"]);
        assert!(tokens[0].is_whitespace);
    }

    #[test]
    fn test_space_set() {
        assert!(is_space(' '));
        assert!(is_space('\u{3000}'));
        assert!(is_space('\u{feff}'));
        assert!(!is_space('\u{85}'));
        assert!(!is_space('\u{1160}'));
    }

    #[test]
    fn test_bom_splits_and_next_line_joins() {
        let tokens = tokenize("a\u{feff}b\u{85}c");
        assert_eq!(texts(&tokens), vec!["a", "\u{feff}", "b\u{85}c"]);
        assert_eq!(trim_spaces("\u{feff} x \u{feff}"), "x");
        assert_eq!(trim_spaces("\u{85}x"), "\u{85}x");
        assert_eq!(words("a\u{feff}\u{feff}b\u{85}c").count(), 2);
    }

    #[test]
    fn test_concatenation_is_lossless() {
        let input = "a\tb  c \u{3000}d";
        let joined: String = tokenize(input).iter().map(|t| t.text).collect();
        assert_eq!(joined, input);
    }
}
