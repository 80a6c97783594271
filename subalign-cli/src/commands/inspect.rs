//! Track preview command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use subalign_core::Track;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Reference (primary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Comparison (secondary-language) subtitle file
    #[arg(short, long, value_name = "FILE")]
    pub comparison: PathBuf,

    /// Number of leading segments to show per track
    #[arg(short, long, value_name = "N", default_value_t = 15)]
    pub limit: usize,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let session = super::load_session(&self.reference, &self.comparison)?;
        print_track("Reference", session.reference(), self.limit);
        println!();
        print_track("Comparison", session.comparison(), self.limit);
        Ok(())
    }
}

fn print_track(label: &str, track: &Track, limit: usize) {
    println!("{label} track ({} segments):", track.len());
    println!("index\tstart\tend\ttext");
    for (index, seg) in track.segments().iter().take(limit).enumerate() {
        println!("{index}\t{}\t{}\t{}", seg.start, seg.end, seg.text);
    }
}
