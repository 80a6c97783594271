//! Manual index-based pairing command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::index_list::parse_index_list;

/// Arguments for the manual command
#[derive(Debug, Args)]
pub struct ManualArgs {
    /// Reference (primary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Comparison (secondary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub comparison: PathBuf,

    /// Reference indices, e.g. "(2,4,6)"
    #[arg(long, value_name = "INDICES")]
    pub ref_indices: String,

    /// Comparison indices, e.g. "(3,5,6)"
    #[arg(long, value_name = "INDICES")]
    pub cmp_indices: String,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ManualArgs {
    /// Execute the manual command
    ///
    /// The pair table is display-only; nothing is persisted.
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let ref_indices = parse_index_list(&self.ref_indices)?;
        let cmp_indices = parse_index_list(&self.cmp_indices)?;

        let session = super::load_session(&self.reference, &self.comparison)?;
        let pairs = session.manual_pairs(&ref_indices, &cmp_indices)?;

        println!("ref_start\tref_text\tcmp_start\tcmp_text\tinterval");
        for pair in &pairs {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                pair.ref_start, pair.ref_text, pair.cmp_start, pair.cmp_text, pair.interval
            );
        }
        log::info!("built {} manual pairs", pairs.len());

        Ok(())
    }
}
