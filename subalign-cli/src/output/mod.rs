//! Output formatting for alignment tables

use anyhow::Result;
use subalign_core::AlignedRow;

/// Trait for alignment-row formatters
pub trait RowWriter {
    /// Format and buffer a single alignment row
    fn write_row(&mut self, row: &AlignedRow) -> Result<()>;

    /// Finalize output (write header/footer, flush)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod json;
pub mod persist;
pub mod text;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use text::TextWriter;

/// Selectable output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of row objects
    Json,
    /// Tab-separated plain text
    Text,
}

/// Render rows to bytes with the chosen format
pub fn render(rows: &[AlignedRow], format: OutputFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer: Box<dyn RowWriter + '_> = match format {
            OutputFormat::Csv => Box::new(CsvWriter::new(&mut buffer)),
            OutputFormat::Json => Box::new(JsonWriter::new(&mut buffer)),
            OutputFormat::Text => Box::new(TextWriter::new(&mut buffer)),
        };
        for row in rows {
            writer.write_row(row)?;
        }
        writer.finish()?;
    }
    Ok(buffer)
}
