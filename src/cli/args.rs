//! Command line argument parsing for Lemna CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::Language;
use crate::table::convert::TableFormat;

/// Lemna - A text normalization pipeline for tabular datasets
#[derive(Parser, Debug, Clone)]
#[command(name = "lemna")]
#[command(about = "A text normalization pipeline for tabular datasets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lemna Contributors")]
#[command(long_about = None)]
pub struct LemnaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LemnaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a text column of a dataset
    Process(ProcessArgs),

    /// List supported languages
    Languages,
}

/// Arguments for processing a dataset
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Path to the input dataset (CSV or JSONL)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Name of the text column to process
    #[arg(short, long, default_value = "text")]
    pub column: String,

    /// Language of the text
    #[arg(short, long, default_value = "english")]
    pub language: Language,

    /// Input format (inferred from the file extension when omitted)
    #[arg(short, long)]
    pub format: Option<TableFormat>,

    /// Output file for the processed dataset as JSONL (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// File with extra stop words, one per line
    #[arg(long, value_name = "STOP_WORDS_FILE")]
    pub stop_words: Option<PathBuf>,

    /// CSV delimiter character
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Name of the cleaned text column
    #[arg(long, default_value = "clean_text")]
    pub clean_column: String,

    /// Name of the tokens column
    #[arg(long, default_value = "tokens")]
    pub tokens_column: String,

    /// Name of the lemmatized tokens column
    #[arg(long, default_value = "lemmatized_tokens")]
    pub lemma_column: String,
}
