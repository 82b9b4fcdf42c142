//! Basic usage example for the Lemna text normalization pipeline.

use std::sync::Arc;

use lemna::error::Result;
use lemna::model::{Language, SnowballModel};
use lemna::processor::TextProcessor;
use lemna::table::Table;

fn main() -> Result<()> {
    println!("=== Lemna Text Normalization Demo ===\n");

    // Build a small review dataset
    let mut table = Table::builder()
        .add_integer_column("id", vec![1, 2, 3])
        .add_text_column(
            "review",
            vec![
                "The Quick-Brown Foxes are running!",
                "Great products and fast delivery.",
                "Lazy dogs sleep all day...",
            ],
        )
        .build()?;

    println!("Loaded {} rows", table.row_count());

    // Create an English processor and normalize the review column
    let model = Arc::new(SnowballModel::new(Language::English));
    let processor = TextProcessor::new(model);
    processor.process(&mut table, "review")?;

    println!("Columns after processing: {:?}\n", table.column_names());

    // Show each review next to its lemmatized form
    for row in 0..table.row_count() {
        let review = table.column("review").unwrap().get(row).unwrap();
        let lemmas = table
            .column("lemmatized_tokens")
            .unwrap()
            .get(row)
            .unwrap();
        println!("  {:38} -> {}", review.to_text(), lemmas.to_text());
    }

    Ok(())
}
