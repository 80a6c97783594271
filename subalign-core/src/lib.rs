//! Nearest-timestamp alignment of bilingual subtitle tracks
//!
//! Two subtitle tracks of the same media, one per language, rarely agree
//! on timing. This crate parses nothing itself; given two ordered segment
//! sequences from an upstream parser it filters each to its language by
//! script presence, optionally removes a constant sync drift, and computes
//! a best-effort one-row-per-reference-segment correspondence by nearest
//! start time under a tolerance, surfacing leftover comparison segments as
//! trailing unmatched records. Explicit index-based pairing is available
//! for the cases the automatic pass gets wrong.

#![warn(missing_docs)]

pub mod error;
pub mod language;
pub mod manual;
pub mod matcher;
pub mod segment;
pub mod session;
pub mod shift;
pub mod time;

pub use error::{AlignError, Result};
pub use language::{ScriptFilter, TrackLanguage};
pub use manual::ManualPair;
pub use matcher::{Alignment, AlignedRow, MatchOutcome, DEFAULT_TOLERANCE};
pub use segment::{Segment, Track};
pub use session::Session;
pub use shift::MAX_SHIFT;
pub use time::TimeOffset;
