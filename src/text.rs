//! Text normalization: raw corpus text to a lowercase token sequence
//!
//! Line breaks become spaces, every character outside `[a-zA-Z]` and
//! whitespace becomes a space, the result is lowercased and split on
//! whitespace runs. Malformed input is never an error; it simply
//! yields fewer (or zero) tokens.

/// Normalize raw text into the ordered token sequence that feeds
/// graph construction.
pub fn normalize(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                // Punctuation, digits, line breaks, and any non-Latin
                // character all separate words.
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(normalize("The Quick Fox"), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(
            normalize("hello, world! it's fine."),
            vec!["hello", "world", "it", "s", "fine"]
        );
    }

    #[test]
    fn line_breaks_become_separators() {
        assert_eq!(normalize("one\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn digits_and_symbols_dropped() {
        assert_eq!(normalize("v2 beta-3 @home"), vec!["v", "beta", "home"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize("  a \t  b  "), vec!["a", "b"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("123 !?. \n").is_empty());
    }
}
