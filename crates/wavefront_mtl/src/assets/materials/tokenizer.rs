//! Zero-copy tokenizer over a delimiter set
//!
//! Every delimiter ends exactly one token, so two adjacent delimiters produce an empty token
//! between them. Decoders rely on that to tell "value omitted" apart from "value present".

use std::collections::TryReserveError;

/// One token borrowed from the tokenizer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text, without its delimiter
    pub text: &'a str,
    /// Byte offset of the first character in the input
    pub start: usize,
    /// Byte offset one past the last character in the input
    pub end: usize,
}

impl Token<'_> {
    /// Whether the token has no characters
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `(start, end)` byte span in the input
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Splits an input string on any character of a delimiter set
///
/// The tokenizer never allocates. Input past the last delimiter forms the final token;
/// after it the tokenizer is exhausted.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 'd> {
    input: &'a str,
    delimiters: &'d str,
    cursor: Option<usize>,
}

impl<'a, 'd> Tokenizer<'a, 'd> {
    /// Create a tokenizer positioned at the start of `input`
    pub const fn new(input: &'a str, delimiters: &'d str) -> Self {
        Self {
            input,
            delimiters,
            cursor: Some(0),
        }
    }

    /// The delimiter set this tokenizer splits on
    pub const fn delimiters(&self) -> &'d str {
        self.delimiters
    }

    /// Unconsumed input, starting at the cursor
    pub fn remainder(&self) -> &'a str {
        let input = self.input;
        self.cursor.map_or("", |cursor| &input[cursor..])
    }

    /// Whether `c` belongs to the delimiter set
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }

    /// Next token with at least one character, skipping empty ones
    pub fn next_value(&mut self) -> Option<Token<'a>> {
        self.find(|token| !token.is_empty())
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let input = self.input;
        let rest = &input[start..];

        match rest.char_indices().find(|(_, c)| self.delimiters.contains(*c)) {
            Some((offset, delimiter)) => {
                let end = start + offset;
                self.cursor = Some(end + delimiter.len_utf8());
                Some(Token {
                    text: &rest[..offset],
                    start,
                    end,
                })
            }
            None => {
                self.cursor = None;
                Some(Token {
                    text: rest,
                    start,
                    end: input.len(),
                })
            }
        }
    }
}

/// Copy token text into an owned string, reporting allocation failure instead of aborting
pub fn copy_token(text: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len())?;
    owned.push_str(text);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokenizer: Tokenizer<'a, '_>) -> Vec<&'a str> {
        tokenizer.map(|token| token.text).collect()
    }

    #[test]
    fn test_splits_on_any_delimiter() {
        let tokens = texts(Tokenizer::new("Ka 0.1\t0.2 0.3", " \t"));
        assert_eq!(tokens, vec!["Ka", "0.1", "0.2", "0.3"]);
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_token() {
        let tokens = texts(Tokenizer::new("Ka  0.1", " \t"));
        assert_eq!(tokens, vec!["Ka", "", "0.1"]);
    }

    #[test]
    fn test_trailing_delimiter_yields_final_empty_token() {
        let mut tokenizer = Tokenizer::new("Ka 0.1 ", " \t");
        assert_eq!(tokenizer.next().map(|t| t.text), Some("Ka"));
        assert_eq!(tokenizer.next().map(|t| t.text), Some("0.1"));
        let last = tokenizer.next().unwrap();
        assert!(last.is_empty());
        assert_eq!(last.span(), (7, 7));
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_exhausted_after_last_token() {
        let mut tokenizer = Tokenizer::new("illum", " \t");
        assert_eq!(tokenizer.next().map(|t| t.text), Some("illum"));
        assert!(tokenizer.next().is_none());
        assert!(tokenizer.next().is_none());
        assert_eq!(tokenizer.remainder(), "");
    }

    #[test]
    fn test_spans_index_into_input() {
        let input = "newmtl Brass";
        let tokens: Vec<_> = Tokenizer::new(input, " ").collect();
        assert_eq!(tokens[1].span(), (7, 12));
        assert_eq!(&input[tokens[1].start..tokens[1].end], "Brass");
    }

    #[test]
    fn test_remainder_tracks_cursor() {
        let mut tokenizer = Tokenizer::new("map_Kd my texture.png", " \t");
        tokenizer.next();
        assert_eq!(tokenizer.remainder(), "my texture.png");
    }

    #[test]
    fn test_line_delimiters_split_crlf() {
        let lines = texts(Tokenizer::new("a\r\nb\nc", "\n\r"));
        assert_eq!(lines, vec!["a", "", "b", "c"]);
    }

    #[test]
    fn test_next_value_skips_empty_tokens() {
        let mut tokenizer = Tokenizer::new("  Ns   32", " ");
        assert_eq!(tokenizer.next_value().map(|t| t.text), Some("Ns"));
        assert_eq!(tokenizer.next_value().map(|t| t.text), Some("32"));
        assert!(tokenizer.next_value().is_none());
    }

    #[test]
    fn test_copy_token_owns_text() {
        let owned = {
            let buffer = String::from("newmtl Steel");
            copy_token(&buffer[7..]).unwrap()
        };
        assert_eq!(owned, "Steel");
    }
}
