//! Text analysis module for Lemna.
//!
//! This module provides the building blocks of the normalization pipeline:
//! char filters that rewrite raw text, tokenizers that split it into tokens,
//! and token filters that transform or drop tokens.

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::{AlphanumericCharFilter, CharFilter};
pub use token::{Token, TokenStream};
pub use token_filter::{AlphanumFilter, Filter, LowercaseFilter, StopFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
