//! subalign CLI library
//!
//! Thin I/O glue around `subalign-core`: SRT file reading, index-literal
//! parsing, output formatting, and command dispatch.

pub mod commands;
pub mod index_list;
pub mod input;
pub mod output;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
