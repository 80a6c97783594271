//! CLI command implementations

use clap::Subcommand;
use std::path::Path;
use subalign_core::{ScriptFilter, Session, TrackLanguage};

use crate::input::SrtReader;
use crate::CliResult;

pub mod align;
pub mod clean;
pub mod inspect;
pub mod manual;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Automatically match the two tracks by nearest start time
    Align(align::AlignArgs),

    /// Pair segments explicitly by index lists
    Manual(manual::ManualArgs),

    /// Preview the leading segments of both loaded tracks
    Inspect(inspect::InspectArgs),

    /// Delete a persisted alignment result
    Clean(clean::CleanArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Manual(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::Clean(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Load both subtitle files into a fresh session
///
/// The reference file is filtered to the primary language, the comparison
/// file to the secondary one.
pub(crate) fn load_session(reference: &Path, comparison: &Path) -> CliResult<Session> {
    let filter = ScriptFilter::default();
    let reference = SrtReader::read_track(reference, TrackLanguage::Primary, &filter)?;
    let comparison = SrtReader::read_track(comparison, TrackLanguage::Secondary, &filter)?;
    Ok(Session::new(reference, comparison))
}
