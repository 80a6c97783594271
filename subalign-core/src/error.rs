//! Error types for subtitle alignment

use thiserror::Error;

/// Alignment-level errors
#[derive(Error, Debug)]
pub enum AlignError {
    /// Source data could not be interpreted as timestamped segments
    #[error("unparseable segment data: {0}")]
    Format(String),

    /// Input failed validation before parsing (wrong file type, etc.)
    #[error("invalid input: {0}")]
    Validation(String),

    /// A parameter value is outside its allowed range
    #[error("invalid parameter '{param}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        param: &'static str,
        /// The rejected value, rendered for display
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A manual-pairing index is outside the track's bounds
    #[error("index {index} out of bounds for track of length {len}")]
    InvalidIndex {
        /// The out-of-range index
        index: usize,
        /// Length of the track it was applied to
        len: usize,
    },

    /// An index list literal could not be parsed
    #[error("malformed index list: {0}")]
    MalformedIndexList(String),
}

/// Result type for alignment operations
pub type Result<T> = std::result::Result<T, AlignError>;
