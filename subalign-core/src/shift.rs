//! Constant time-shift correction
//!
//! Two tracks of the same media often carry a fixed sync drift; the shift
//! operation removes it by moving every start time of one track by the
//! same amount.

use crate::error::{AlignError, Result};
use crate::segment::{Segment, Track};
use crate::time::TimeOffset;

/// Default bound on the shift magnitude (one hour)
pub const MAX_SHIFT: TimeOffset = TimeOffset::from_millis(3_600_000);

/// Shift every start time of `track` by `offset`
///
/// Sign convention: `start' = start - offset`, so a positive offset moves
/// the track earlier. End times are intentionally left untouched; the
/// reference behavior this preserves shifts only starts, and downstream
/// matching reads starts exclusively. Flagged as compatibility behavior,
/// not a considered design choice.
///
/// The input track is always the original, unshifted one; the operation
/// never compounds. Callers wanting a cumulative shift must track the
/// running offset themselves (the [`crate::session::Session`] does).
///
/// The offset magnitude is bounded to [`MAX_SHIFT`]; callers with a
/// different limit use [`shift_track_bounded`].
pub fn shift_track(track: &Track, offset: TimeOffset) -> Result<Track> {
    shift_track_bounded(track, offset, MAX_SHIFT)
}

/// [`shift_track`] with a caller-supplied bound on the offset magnitude
pub fn shift_track_bounded(
    track: &Track,
    offset: TimeOffset,
    max_magnitude: TimeOffset,
) -> Result<Track> {
    if offset.as_millis().unsigned_abs() > max_magnitude.as_millis().unsigned_abs() {
        return Err(AlignError::InvalidParameter {
            param: "shift",
            value: format!("{:.3}s", offset.as_secs_f64()),
            reason: format!(
                "magnitude exceeds {:.0} seconds",
                max_magnitude.as_secs_f64()
            ),
        });
    }

    let segments = track
        .segments()
        .iter()
        .map(|seg| Segment {
            start: seg.start - offset,
            end: seg.end,
            text: seg.text.clone(),
        })
        .collect();
    Ok(Track::from_segments(segments, track.language()))
}
