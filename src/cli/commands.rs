//! Command implementations for Lemna CLI.

use std::io::{self, BufWriter};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::{Command, LemnaArgs, ProcessArgs};
use crate::error::{LemnaError, Result};
use crate::model::{Language, LanguageModel, SnowballModel};
use crate::processor::{ProcessorConfig, TextProcessor};
use crate::table::convert::{CsvTableReader, JsonlTableReader, JsonlTableWriter, TableFormat};

/// Execute a CLI command.
pub fn execute_command(args: LemnaArgs) -> Result<()> {
    match &args.command {
        Command::Process(process_args) => process_dataset(process_args.clone(), &args),
        Command::Languages => list_languages(),
    }
}

/// Process a text column of a dataset.
fn process_dataset(args: ProcessArgs, cli_args: &LemnaArgs) -> Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => TableFormat::from_path(&args.input_file).ok_or_else(|| {
            LemnaError::parse(format!(
                "cannot infer the format of '{}'; pass --format",
                args.input_file.display()
            ))
        })?,
    };

    if cli_args.verbosity() > 1 {
        println!("Reading dataset from: {}", args.input_file.display());
    }

    let start_time = Instant::now();

    let mut table = match format {
        TableFormat::Csv => CsvTableReader::new()
            .with_delimiter(args.delimiter)?
            .read(&args.input_file)?,
        TableFormat::Jsonl => JsonlTableReader::new().read(&args.input_file)?,
    };

    debug!(
        "read {} rows and {} columns",
        table.row_count(),
        table.column_count()
    );

    let mut model = SnowballModel::new(args.language);
    if let Some(stop_words_file) = &args.stop_words {
        model = model.add_stop_words_from_file(stop_words_file)?;
        debug!("stop word list has {} entries", model.stop_words().len());
    }

    let config = ProcessorConfig::default()
        .with_clean_column(args.clean_column)
        .with_tokens_column(args.tokens_column)
        .with_lemma_column(args.lemma_column);
    let processor = TextProcessor::with_config(Arc::new(model), config);

    processor.process(&mut table, &args.column)?;

    info!(
        "processed {} rows in {:.2?}",
        table.row_count(),
        start_time.elapsed()
    );

    let writer = JsonlTableWriter::new();
    match &args.output {
        Some(path) => {
            writer.write(&table, path)?;
            if cli_args.verbosity() > 0 {
                println!("Processed {} rows to: {}", table.row_count(), path.display());
            }
        }
        None => {
            writer.write_to(&table, BufWriter::new(io::stdout().lock()))?;
        }
    }

    Ok(())
}

/// List the supported languages.
fn list_languages() -> Result<()> {
    for &language in Language::all() {
        println!("{} ({})", language, language.code());
    }
    Ok(())
}
