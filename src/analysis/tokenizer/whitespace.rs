//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Runs of whitespace act as a single separator, so consecutive spaces,
/// tabs, and newlines never produce empty tokens. Leading and trailing
/// whitespace is ignored. Each token records its position in the stream
/// and its byte offsets into the input text.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut word_start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = word_start.take() {
                    tokens.push(Token::with_offsets(&text[start..offset], position, start, offset));
                    position += 1;
                }
            } else if word_start.is_none() {
                word_start = Some(offset);
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(&text[start..], position, start, text.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_positions_and_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a bb  ccc").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].position, 0);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 1));
        assert_eq!(tokens[1].position, 1);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (2, 4));
        assert_eq!(tokens[2].position, 2);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (6, 9));
    }

    #[test]
    fn test_repeated_words_have_distinct_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("go go go").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[2].start_offset, 6);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("  padded  ").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "padded");
        assert_eq!(tokens[0].start_offset, 2);
    }

    #[test]
    fn test_splits_on_unicode_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello\u{a0}world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        // The separator is two bytes in UTF-8
        assert_eq!(tokens[1].start_offset, 7);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize(" \t\n ").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
