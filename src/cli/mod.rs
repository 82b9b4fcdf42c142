//! Command Line Interface for the Lemna text processor.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
