//! JSON output formatter

use super::RowWriter;
use anyhow::Result;
use std::io::Write;
use subalign_core::AlignedRow;

/// JSON formatter - buffers rows and emits one pretty-printed array
pub struct JsonWriter<W: Write> {
    writer: W,
    rows: Vec<AlignedRow>,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> RowWriter for JsonWriter<W> {
    fn write_row(&mut self, row: &AlignedRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
