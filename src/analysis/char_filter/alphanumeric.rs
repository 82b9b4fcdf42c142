//! Alphanumeric char filter implementation.
//!
//! This filter reduces arbitrary text to a cleaned form containing only
//! lowercase letters, digits, whitespace, and hyphens. It is the first
//! stage of the normalization pipeline.
//!
//! # Examples
//!
//! ```
//! use lemna::analysis::char_filter::CharFilter;
//! use lemna::analysis::char_filter::alphanumeric::AlphanumericCharFilter;
//!
//! let filter = AlphanumericCharFilter::new();
//! assert_eq!(
//!     filter.filter("The Quick-Brown Foxes are running!"),
//!     "the quick-brown foxes are running"
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// Matches every character that is not an ASCII letter, digit, whitespace,
/// or hyphen. Matched characters are deleted, not replaced.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").expect("strip pattern should be valid"));

/// A char filter that strips symbols, lowercases, and trims.
///
/// # Behavior
///
/// 1. Delete every character that is not an ASCII letter, digit,
///    whitespace, or hyphen. Deleted characters are not escaped or
///    flagged; they simply vanish.
/// 2. Lowercase the result.
/// 3. Trim leading and trailing whitespace.
///
/// The output alphabet is therefore lowercase ASCII letters, digits,
/// whitespace, and hyphens, and the filter is idempotent: applying it to
/// its own output changes nothing.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericCharFilter;

impl AlphanumericCharFilter {
    /// Create a new alphanumeric char filter.
    pub fn new() -> Self {
        AlphanumericCharFilter
    }
}

impl CharFilter for AlphanumericCharFilter {
    fn filter(&self, input: &str) -> String {
        let stripped = NON_ALPHANUMERIC.replace_all(input, "");
        stripped.to_lowercase().trim().to_string()
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
