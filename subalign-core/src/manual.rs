//! Manual index-based pairing
//!
//! An escape hatch for the cases automatic matching gets wrong: the user
//! names segment indices in both tracks explicitly and the builder zips
//! them positionally, reporting the time interval between each pair.

use crate::error::{AlignError, Result};
use crate::segment::Track;
use crate::time::TimeOffset;
use serde::Serialize;

/// An explicitly requested pair of segments and their time interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualPair {
    /// Start time of the reference segment
    pub ref_start: TimeOffset,
    /// Reference segment text
    pub ref_text: String,
    /// Start time of the comparison segment
    pub cmp_start: TimeOffset,
    /// Comparison segment text
    pub cmp_text: String,
    /// Signed interval, `cmp_start - ref_start`
    pub interval: TimeOffset,
}

/// Zip explicit index lists into manual pairs
///
/// Index lists pair positionally up to the shorter length; extra indices
/// in the longer list are silently dropped. Every supplied index is bounds
/// checked against its track, including the dropped extras. The supplied
/// order is authoritative; nothing is time sorted.
pub fn build_pairs(
    reference: &Track,
    comparison: &Track,
    ref_indices: &[usize],
    cmp_indices: &[usize],
) -> Result<Vec<ManualPair>> {
    check_bounds(ref_indices, reference.len())?;
    check_bounds(cmp_indices, comparison.len())?;

    let pairs = ref_indices
        .iter()
        .zip(cmp_indices)
        .map(|(&ref_index, &cmp_index)| {
            let r = &reference.segments()[ref_index];
            let c = &comparison.segments()[cmp_index];
            ManualPair {
                ref_start: r.start,
                ref_text: r.text.clone(),
                cmp_start: c.start,
                cmp_text: c.text.clone(),
                interval: c.start - r.start,
            }
        })
        .collect();
    Ok(pairs)
}

fn check_bounds(indices: &[usize], len: usize) -> Result<()> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(AlignError::InvalidIndex { index, len }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::TrackLanguage;
    use crate::segment::Segment;

    fn track(entries: &[(i64, &str)]) -> Track {
        let segments = entries
            .iter()
            .map(|&(start_ms, text)| {
                Segment::new(
                    TimeOffset::from_millis(start_ms),
                    TimeOffset::from_millis(start_ms + 1_000),
                    text,
                )
            })
            .collect();
        Track::from_segments(segments, TrackLanguage::Primary)
    }

    #[test]
    fn pairs_zip_to_the_shorter_list() {
        let reference = track(&[(0, "A"), (5_000, "B")]);
        let comparison = track(&[(300, "a")]);
        let pairs = build_pairs(&reference, &comparison, &[0, 1], &[0]).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].ref_text, "A");
        assert_eq!(pairs[0].cmp_text, "a");
    }

    #[test]
    fn interval_is_signed() {
        let reference = track(&[(5_000, "A")]);
        let comparison = track(&[(300, "a")]);
        let pairs = build_pairs(&reference, &comparison, &[0], &[0]).unwrap();
        assert_eq!(pairs[0].interval.as_millis(), -4_700);
    }

    #[test]
    fn out_of_bounds_index_fails() {
        let reference = track(&[(0, "A"), (1, "B"), (2, "C"), (3, "D"), (4, "E")]);
        let comparison = track(&[(0, "a")]);
        let err = build_pairs(&reference, &comparison, &[99], &[0]).unwrap_err();
        assert!(matches!(err, AlignError::InvalidIndex { index: 99, len: 5 }));
    }

    #[test]
    fn dropped_extras_are_still_bounds_checked() {
        let reference = track(&[(0, "A")]);
        let comparison = track(&[(0, "a")]);
        // Index 7 would be dropped by the zip, but it is still invalid
        let err = build_pairs(&reference, &comparison, &[0, 7], &[0]).unwrap_err();
        assert!(matches!(err, AlignError::InvalidIndex { index: 7, len: 1 }));
    }

    #[test]
    fn supplied_order_is_authoritative() {
        let reference = track(&[(0, "A"), (5_000, "B")]);
        let comparison = track(&[(300, "a"), (5_300, "b")]);
        let pairs = build_pairs(&reference, &comparison, &[1, 0], &[0, 1]).unwrap();
        assert_eq!(pairs[0].ref_text, "B");
        assert_eq!(pairs[0].cmp_text, "a");
        assert_eq!(pairs[0].interval.as_millis(), -4_700);
        assert_eq!(pairs[1].ref_text, "A");
        assert_eq!(pairs[1].cmp_text, "b");
    }
}
