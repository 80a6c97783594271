//! CSV output formatter
//!
//! Writes the persisted alignment table: a `ref_text,cmp_text` header row,
//! then one row per matched pair or unmatched record, UTF-8 encoded with
//! RFC 4180 quoting.

use super::RowWriter;
use anyhow::Result;
use std::io::Write;
use subalign_core::AlignedRow;

/// CSV formatter with a header row
pub struct CsvWriter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "ref_text,cmp_text")?;
            self.header_written = true;
        }
        Ok(())
    }
}

/// Quote a field if it contains a comma, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl<W: Write> RowWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &AlignedRow) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "{},{}",
            escape_field(&row.ref_text),
            escape_field(&row.cmp_text)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        Ok(())
    }
}
