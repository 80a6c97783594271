//! Per-session workflow state
//!
//! One session owns the two loaded tracks plus everything derived from
//! them: the shifted comparison track and the last alignment, both cached
//! for reuse. Operations run one at a time and synchronously; the session
//! is exclusively owned by its caller and needs no locking.

use crate::error::Result;
use crate::manual::{self, ManualPair};
use crate::matcher::{self, Alignment};
use crate::segment::Track;
use crate::shift;
use crate::time::TimeOffset;

/// Workflow context for one pair of loaded tracks
#[derive(Debug, Clone)]
pub struct Session {
    reference: Track,
    comparison: Track,
    shifted: Option<ShiftedTrack>,
    alignment: Option<Alignment>,
}

#[derive(Debug, Clone)]
struct ShiftedTrack {
    offset: TimeOffset,
    track: Track,
}

impl Session {
    /// Create a session over a freshly loaded track pair
    pub fn new(reference: Track, comparison: Track) -> Self {
        Session {
            reference,
            comparison,
            shifted: None,
            alignment: None,
        }
    }

    /// The reference track
    pub fn reference(&self) -> &Track {
        &self.reference
    }

    /// The comparison track, as loaded
    pub fn comparison(&self) -> &Track {
        &self.comparison
    }

    /// Shift the comparison track by a constant offset and cache the result
    ///
    /// Always derives from the original comparison track: applying a shift
    /// twice replaces the previous one, it never compounds. A cached
    /// alignment is discarded because it was computed against the old
    /// shift.
    pub fn apply_shift(&mut self, offset: TimeOffset) -> Result<()> {
        let track = shift::shift_track(&self.comparison, offset)?;
        log::info!("comparison track shifted by {:.3}s", offset.as_secs_f64());
        self.shifted = Some(ShiftedTrack { offset, track });
        self.alignment = None;
        Ok(())
    }

    /// The currently applied shift offset, if any
    pub fn shift_offset(&self) -> Option<TimeOffset> {
        self.shifted.as_ref().map(|s| s.offset)
    }

    /// The comparison track the matcher will see: shifted if a shift was
    /// applied, otherwise the original
    pub fn effective_comparison(&self) -> &Track {
        self.shifted
            .as_ref()
            .map(|s| &s.track)
            .unwrap_or(&self.comparison)
    }

    /// Run automatic matching and cache the alignment
    ///
    /// Both tracks are sorted ascending by start before the merge, as the
    /// matcher contract requires.
    pub fn run_matching(&mut self, tolerance: TimeOffset) -> Result<&Alignment> {
        let reference = self.reference.sorted_by_start();
        let comparison = self.effective_comparison().sorted_by_start();
        let alignment = matcher::align_tracks(&reference, &comparison, tolerance);
        log::info!(
            "matched {} of {} reference segments, {} comparison segments unmatched",
            alignment.matched,
            reference.len(),
            alignment.unmatched
        );
        Ok(self.alignment.insert(alignment))
    }

    /// The cached result of the last matching run, if any
    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    /// Discard the cached alignment
    pub fn clear_alignment(&mut self) {
        self.alignment = None;
    }

    /// Build manual pairs from explicit index lists
    ///
    /// Operates on the tracks as loaded, independent of any shift or
    /// cached alignment.
    pub fn manual_pairs(
        &self,
        ref_indices: &[usize],
        cmp_indices: &[usize],
    ) -> Result<Vec<ManualPair>> {
        manual::build_pairs(&self.reference, &self.comparison, ref_indices, cmp_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::TrackLanguage;
    use crate::matcher::DEFAULT_TOLERANCE;
    use crate::segment::Segment;

    fn track(starts_ms: &[i64]) -> Track {
        let segments = starts_ms
            .iter()
            .map(|&ms| {
                Segment::new(
                    TimeOffset::from_millis(ms),
                    TimeOffset::from_millis(ms + 1_000),
                    format!("t{ms}"),
                )
            })
            .collect();
        Track::from_segments(segments, TrackLanguage::Primary)
    }

    #[test]
    fn shift_replaces_rather_than_compounds() {
        let mut session = Session::new(track(&[0]), track(&[10_000]));
        session.apply_shift(TimeOffset::from_millis(2_000)).unwrap();
        session.apply_shift(TimeOffset::from_millis(3_000)).unwrap();
        assert_eq!(
            session.effective_comparison().segments()[0].start.as_millis(),
            7_000
        );
        assert_eq!(session.shift_offset(), Some(TimeOffset::from_millis(3_000)));
    }

    #[test]
    fn matching_uses_the_shifted_track() {
        // Comparison is 5s late; without the shift nothing matches
        let mut session = Session::new(track(&[0]), track(&[5_200]));
        session.run_matching(DEFAULT_TOLERANCE).unwrap();
        assert_eq!(session.alignment().unwrap().matched, 0);

        session.apply_shift(TimeOffset::from_secs_f64(5.0)).unwrap();
        // Applying a shift invalidates the cached alignment
        assert!(session.alignment().is_none());

        session.run_matching(DEFAULT_TOLERANCE).unwrap();
        assert_eq!(session.alignment().unwrap().matched, 1);
    }

    #[test]
    fn failed_shift_leaves_state_intact() {
        let mut session = Session::new(track(&[0]), track(&[5_000]));
        session.apply_shift(TimeOffset::from_millis(1_000)).unwrap();
        session.run_matching(DEFAULT_TOLERANCE).unwrap();

        assert!(session.apply_shift(TimeOffset::from_millis(4_000_000)).is_err());
        assert_eq!(session.shift_offset(), Some(TimeOffset::from_millis(1_000)));
        assert!(session.alignment().is_some());
    }

    #[test]
    fn clear_discards_cached_alignment() {
        let mut session = Session::new(track(&[0]), track(&[100]));
        session.run_matching(DEFAULT_TOLERANCE).unwrap();
        assert!(session.alignment().is_some());
        session.clear_alignment();
        assert!(session.alignment().is_none());
    }
}
