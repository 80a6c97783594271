//! Plain text output formatter

use super::RowWriter;
use anyhow::Result;
use std::io::Write;
use subalign_core::AlignedRow;

/// Tab-separated formatter, one row per line
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RowWriter for TextWriter<W> {
    fn write_row(&mut self, row: &AlignedRow) -> Result<()> {
        writeln!(self.writer, "{}\t{}", row.ref_text, row.cmp_text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
