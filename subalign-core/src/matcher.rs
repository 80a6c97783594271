//! Nearest-timestamp matching and unmatched-segment reconciliation
//!
//! The matcher walks a reference track and a comparison track, both sorted
//! ascending by start time, in a single two-pointer merge pass. Each
//! reference segment is paired with the comparison segment whose start is
//! closest in absolute time, provided the distance is within tolerance.
//! Matching is not exclusive: the same comparison segment may be the
//! nearest for several reference segments.

use crate::segment::Track;
use crate::time::TimeOffset;
use serde::Serialize;
use std::collections::HashSet;

/// Maximum time distance for a nearest match to count, fixed at one second
pub const DEFAULT_TOLERANCE: TimeOffset = TimeOffset::from_millis(1_000);

/// One matcher decision: a reference index and its selected comparison
/// index, if any survived the tolerance check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Index into the reference track
    pub ref_index: usize,
    /// Index into the comparison track, `None` if no segment was within
    /// tolerance
    pub cmp_index: Option<usize>,
}

/// One row of the final alignment table
///
/// Matched pairs carry both texts; a reference segment without a match has
/// an empty `cmp_text`, and an unmatched comparison segment has an empty
/// `ref_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRow {
    /// Reference-track text, empty for unmatched comparison segments
    pub ref_text: String,
    /// Comparison-track text, empty when nothing was within tolerance
    pub cmp_text: String,
}

/// The reconciled result of one matching run
///
/// Rows hold one entry per reference segment, in reference order, followed
/// by every never-selected comparison segment in comparison order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// The alignment table, matched pairs first then unmatched records
    pub rows: Vec<AlignedRow>,
    /// Number of reference segments that received a comparison match
    pub matched: usize,
    /// Number of trailing unmatched comparison records
    pub unmatched: usize,
}

impl Alignment {
    /// Number of leading rows originating from the reference track
    ///
    /// Always equals the reference track's length: every reference segment
    /// produces exactly one row, matched or not.
    pub fn reference_rows(&self) -> usize {
        self.rows.len() - self.unmatched
    }
}

/// Find the nearest comparison segment for each reference segment
///
/// Both tracks must already be sorted ascending by `start`; the calling
/// workflow guarantees this and the function does not re-sort. Ties at
/// equal distance resolve to the earlier-indexed comparison segment. Runs
/// in O(n + m).
pub fn match_nearest(reference: &Track, comparison: &Track, tolerance: TimeOffset) -> Vec<MatchOutcome> {
    let cmp = comparison.segments();
    let tolerance_ms = tolerance.as_millis().unsigned_abs();

    // Lower-bound cursor into the comparison track; only ever advances
    // because reference starts are ascending.
    let mut lower = 0usize;

    reference
        .segments()
        .iter()
        .enumerate()
        .map(|(ref_index, r)| {
            while lower < cmp.len() && cmp[lower].start < r.start {
                lower += 1;
            }

            // Candidates: the last segment strictly before the reference
            // start and the first one at or after it. The nearest overall
            // is always one of these two.
            let before = lower.checked_sub(1).map(|i| (i, cmp[i].start.distance_to(r.start)));
            let at_or_after = cmp
                .get(lower)
                .map(|seg| (lower, seg.start.distance_to(r.start)));

            let best = match (before, at_or_after) {
                (Some((bi, bd)), Some((ai, ad))) => {
                    // Equal distance keeps the earlier index
                    if bd <= ad {
                        Some((bi, bd))
                    } else {
                        Some((ai, ad))
                    }
                }
                (candidate, None) | (None, candidate) => candidate,
            };

            let cmp_index = best
                .filter(|&(_, distance)| distance <= tolerance_ms)
                .map(|(mut index, _)| {
                    // A run of duplicate starts is equidistant as a whole;
                    // the tie goes to the earliest index in the run
                    while index > 0 && cmp[index - 1].start == cmp[index].start {
                        index -= 1;
                    }
                    index
                });

            MatchOutcome { ref_index, cmp_index }
        })
        .collect()
}

/// Build the final alignment table from matcher outcomes
///
/// Appends an unmatched record for every comparison segment never selected
/// by any outcome, in the comparison track's order. Selection is keyed by
/// start-time value, not segment identity: two comparison segments sharing
/// a start time count as one selection key. That quirk is preserved from
/// the reference behavior for output compatibility.
pub fn reconcile(reference: &Track, comparison: &Track, outcomes: &[MatchOutcome]) -> Alignment {
    let cmp = comparison.segments();

    let selected_starts: HashSet<TimeOffset> = outcomes
        .iter()
        .filter_map(|outcome| outcome.cmp_index)
        .map(|index| cmp[index].start)
        .collect();

    let mut rows: Vec<AlignedRow> = outcomes
        .iter()
        .map(|outcome| AlignedRow {
            ref_text: reference.segments()[outcome.ref_index].text.clone(),
            cmp_text: outcome
                .cmp_index
                .map(|index| cmp[index].text.clone())
                .unwrap_or_default(),
        })
        .collect();

    let matched = outcomes.iter().filter(|o| o.cmp_index.is_some()).count();

    let unmatched_rows: Vec<AlignedRow> = cmp
        .iter()
        .filter(|seg| !selected_starts.contains(&seg.start))
        .map(|seg| AlignedRow {
            ref_text: String::new(),
            cmp_text: seg.text.clone(),
        })
        .collect();
    let unmatched = unmatched_rows.len();
    rows.extend(unmatched_rows);

    log::debug!(
        "reconciled {} reference rows ({} matched) with {} unmatched comparison segments",
        outcomes.len(),
        matched,
        unmatched
    );

    Alignment {
        rows,
        matched,
        unmatched,
    }
}

/// Run matching and reconciliation in one step
///
/// Both tracks must be sorted ascending by `start`.
pub fn align_tracks(reference: &Track, comparison: &Track, tolerance: TimeOffset) -> Alignment {
    let outcomes = match_nearest(reference, comparison, tolerance);
    reconcile(reference, comparison, &outcomes)
}
