//! Automatic matching command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use subalign_core::{matcher::DEFAULT_TOLERANCE, TimeOffset};

use crate::output::{self, persist, OutputFormat};

/// Rows printed to stdout after a successful run
const PREVIEW_ROWS: usize = 30;

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Reference (primary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Comparison (secondary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub comparison: PathBuf,

    /// Subtract this many seconds from every comparison start time
    /// before matching (bounded to ±3600, millisecond precision)
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub shift: Option<f64>,

    /// Output file for the alignment table
    #[arg(short, long, value_name = "FILE", default_value = "matched_subtitles.csv")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Suppress the stdout preview
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let mut session = super::load_session(&self.reference, &self.comparison)?;

        if let Some(shift_secs) = self.shift {
            session.apply_shift(TimeOffset::from_secs_f64(shift_secs))?;
        }

        let alignment = session.run_matching(DEFAULT_TOLERANCE)?;

        let bytes = output::render(&alignment.rows, self.format)?;
        persist::persist_atomic(&self.output, &bytes)?;

        if !self.quiet {
            println!(
                "Matched {} of {} reference segments; {} comparison segments unmatched.",
                alignment.matched,
                alignment.reference_rows(),
                alignment.unmatched
            );
            println!("Result written to {}", self.output.display());
            for row in alignment.rows.iter().take(PREVIEW_ROWS) {
                println!("{}\t{}", row.ref_text, row.cmp_text);
            }
        }

        Ok(())
    }
}
