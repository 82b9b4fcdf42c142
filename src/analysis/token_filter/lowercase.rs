//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which keeps the token stream consistent regardless of the casing of the
//! source text.
//!
//! # Examples
//!
//! ```
//! use lemna::analysis::token_filter::Filter;
//! use lemna::analysis::token_filter::lowercase::LowercaseFilter;
//! use lemna::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Token positions and offsets are preserved. Lowercasing is Unicode-aware,
/// so tokens that survived an ASCII-only char filter are unaffected while
/// tokens from other sources are still normalized correctly.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
