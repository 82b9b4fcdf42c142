//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically carry no topical signal. The stop word list is supplied by the
//! caller, usually from a language model's vocabulary.
//!
//! # Examples
//!
//! ```
//! use lemna::analysis::token_filter::Filter;
//! use lemna::analysis::token_filter::stop::StopFilter;
//! use lemna::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the", "are"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Stop word lookup is exact: tokens are expected to already be lowercase
/// when the stop word list is lowercase. Run a `LowercaseFilter` first when
/// the source casing is uncertain.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use lemna::analysis::token_filter::stop::StopFilter;
///
/// let mut words = HashSet::new();
/// words.insert("custom".to_string());
/// words.insert("stop".to_string());
///
/// let filter = StopFilter::with_stop_words(words);
/// assert!(filter.is_stop_word("custom"));
/// assert!(!filter.is_stop_word("hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lemna::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
