//! Persisted-result deletion command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::output::persist;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Persisted result file to delete
    #[arg(short, long, value_name = "FILE", default_value = "matched_subtitles.csv")]
    pub output: PathBuf,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CleanArgs {
    /// Execute the clean command
    ///
    /// Idempotent: deleting an absent result succeeds.
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let removed = persist::delete_result(&self.output)?;
        if !self.quiet {
            if removed {
                println!("Deleted {}", self.output.display());
            } else {
                println!("Nothing to delete at {}", self.output.display());
            }
        }
        Ok(())
    }
}
