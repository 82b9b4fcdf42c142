//! Alphanumeric content filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens containing no alphanumeric characters.
///
/// A token survives when at least one of its characters is an ASCII letter
/// or digit. After the alphanumeric char filter has run, the only tokens
/// this can drop are ones made entirely of hyphens.
///
/// # Examples
///
/// ```
/// use lemna::analysis::token_filter::Filter;
/// use lemna::analysis::token_filter::alphanum::AlphanumFilter;
/// use lemna::analysis::token::Token;
///
/// let filter = AlphanumFilter::new();
/// let tokens = vec![
///     Token::new("hello", 0),
///     Token::new("--", 1),
///     Token::new("t-1000", 2)
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[0].text, "hello");
/// assert_eq!(result[1].text, "t-1000");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphanumFilter;

impl AlphanumFilter {
    /// Create a new alphanumeric content filter.
    pub fn new() -> Self {
        AlphanumFilter
    }
}

impl Filter for AlphanumFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.text.chars().any(|c| c.is_ascii_alphanumeric()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanum"
    }
}
