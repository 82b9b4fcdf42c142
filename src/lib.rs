//! # Lemna
//!
//! A text normalization pipeline for tabular datasets.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Regex-based text cleaning
//! - Whitespace tokenization with stop word and symbol filtering
//! - Snowball-backed lemmatization with irregular form lookup
//! - Column-major tables with CSV and JSON Lines conversion
//! - Configurable output column names

pub mod analysis;
pub mod cli;
pub mod error;
pub mod model;
pub mod processor;
pub mod table;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
