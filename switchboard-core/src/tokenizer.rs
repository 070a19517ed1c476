//! Tokenizer for raw command-line strings.
//!
//! This module splits a single command-line string into an ordered sequence
//! of tokens. Whitespace separates tokens unless it sits inside a pair of
//! matching quote characters, in which case it is kept and the quotes are
//! stripped. Parsing is lenient: an unbalanced quote never raises an error,
//! the remainder of the string simply becomes part of the current token.

/// Split a raw command-line string into tokens.
///
/// Handles the common patterns:
/// - Whitespace-separated words: `-name value`
/// - Quoted spans kept as one token: `-name "John Smith"`
/// - Both `"` and `'` open a span; only the matching character closes it
///
/// Escape sequences are not interpreted inside quotes. An empty input
/// produces an empty vector.
///
/// # Arguments
/// * `raw` - The command-line string to split
///
/// # Returns
/// * `Vec<String>` - The ordered token sequence
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in raw.chars() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                    in_token = true;
                } else if ch.is_whitespace() {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else {
                    current.push(ch);
                    in_token = true;
                }
            }
        }
    }

    // A still-open quote falls through here: the rest of the string has
    // already been collected into the current token.
    if in_token {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only_input() {
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("-name value --flag");
        assert_eq!(tokens, vec!["-name", "value", "--flag"]);
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let tokens = tokenize("a   b\t\tc");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_span_is_one_token() {
        let tokens = tokenize("-name \"John Smith\" --verbose");
        assert_eq!(tokens, vec!["-name", "John Smith", "--verbose"]);
    }

    #[test]
    fn single_quotes_match_single_quotes() {
        let tokens = tokenize("'a b' \"c d\"");
        assert_eq!(tokens, vec!["a b", "c d"]);
    }

    #[test]
    fn other_quote_kind_stays_literal_inside_span() {
        let tokens = tokenize("\"it's here\"");
        assert_eq!(tokens, vec!["it's here"]);
    }

    #[test]
    fn unbalanced_quote_swallows_rest() {
        let tokens = tokenize("-msg \"hello there");
        assert_eq!(tokens, vec!["-msg", "hello there"]);
    }

    #[test]
    fn quoted_empty_string_is_a_token() {
        let tokens = tokenize("-name \"\"");
        assert_eq!(tokens, vec!["-name", ""]);
    }

    #[test]
    fn no_escape_interpretation() {
        let tokens = tokenize("\"a\\nb\"");
        assert_eq!(tokens, vec!["a\\nb"]);
    }

    #[test]
    fn quote_mid_token_joins_pieces() {
        let tokens = tokenize("pre\"fix ed\"post");
        assert_eq!(tokens, vec!["prefix edpost"]);
    }
}
