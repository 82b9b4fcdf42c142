//! Convert a CSV dataset to JSON Lines with normalized text columns.

use std::io::{self, BufWriter};
use std::sync::Arc;

use lemna::error::Result;
use lemna::model::{Language, SnowballModel};
use lemna::processor::TextProcessor;
use lemna::table::{CsvTableReader, JsonlTableWriter};

fn main() -> Result<()> {
    println!("=== CSV to JSON Lines Conversion Demo ===\n");

    let csv_data = "id,review\n\
        1,The Quick-Brown Foxes are running!\n\
        2,Great products and fast delivery\n\
        3,Lazy dogs sleep all day\n";

    // Read the CSV into a column-major table
    let mut table = CsvTableReader::new().read_from(csv_data.as_bytes())?;
    println!("Read {} rows from CSV", table.row_count());

    // Treat corpus-specific noise as stop words on top of the built-in list
    let model = SnowballModel::new(Language::English).with_extra_stop_words(["day"]);
    let processor = TextProcessor::new(Arc::new(model));
    processor.process(&mut table, "review")?;

    // Write the processed table as JSON Lines
    println!("\nProcessed output:");
    let stdout = io::stdout();
    JsonlTableWriter::new().write_to(&table, BufWriter::new(stdout.lock()))?;

    Ok(())
}
