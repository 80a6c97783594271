//! Signed millisecond time offsets
//!
//! Subtitle timestamps are offsets from the start of the media, not wall
//! clock times. A signed representation is required: applying a large shift
//! can move a start time before zero, and manual-pair intervals point in
//! either direction.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed time offset with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TimeOffset(i64);

impl TimeOffset {
    /// The zero offset
    pub const ZERO: TimeOffset = TimeOffset(0);

    /// Create an offset from whole milliseconds
    pub const fn from_millis(ms: i64) -> Self {
        TimeOffset(ms)
    }

    /// Create an offset from fractional seconds, rounded to the nearest
    /// millisecond
    pub fn from_secs_f64(secs: f64) -> Self {
        TimeOffset((secs * 1000.0).round() as i64)
    }

    /// Create an offset from clock components
    pub const fn from_components(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        TimeOffset(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Offset in whole milliseconds
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Offset in fractional seconds
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Absolute time distance to another offset, in milliseconds
    pub const fn distance_to(self, other: TimeOffset) -> u64 {
        (self.0 - other.0).unsigned_abs()
    }
}

impl Add for TimeOffset {
    type Output = TimeOffset;

    fn add(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 + rhs.0)
    }
}

impl Sub for TimeOffset {
    type Output = TimeOffset;

    fn sub(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 - rhs.0)
    }
}

impl Neg for TimeOffset {
    type Output = TimeOffset;

    fn neg(self) -> TimeOffset {
        TimeOffset(-self.0)
    }
}

impl fmt::Display for TimeOffset {
    /// Formats as `HH:MM:SS.mmm`, with a leading `-` for negative offsets
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, ms) = if self.0 < 0 {
            ("-", self.0.unsigned_abs())
        } else {
            ("", self.0 as u64)
        };
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;
        write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}
