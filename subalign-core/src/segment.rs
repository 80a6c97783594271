//! Timestamped text segments and language-homogeneous tracks

use crate::language::{ScriptFilter, TrackLanguage};
use crate::time::TimeOffset;
use serde::Serialize;

/// A single timestamped line of subtitle text
///
/// `start` and `end` are offsets from the beginning of the media. The
/// upstream parser guarantees `start <= end`; segments are typically, but
/// not guaranteed to be, strictly increasing in `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Offset at which the segment appears on screen
    pub start: TimeOffset,
    /// Offset at which the segment leaves the screen
    pub end: TimeOffset,
    /// The segment text
    pub text: String,
}

impl Segment {
    /// Create a segment
    pub fn new(start: TimeOffset, end: TimeOffset, text: impl Into<String>) -> Self {
        Segment {
            start,
            end,
            text: text.into(),
        }
    }
}

/// An ordered sequence of segments, homogeneous in language
///
/// Built once per source file by filtering the raw parsed sequence; the
/// only derived form is a shifted copy (see [`crate::shift`]), the original
/// track is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    language: TrackLanguage,
    segments: Vec<Segment>,
}

impl Track {
    /// Build a track from a raw parsed segment sequence
    ///
    /// Keeps only segments whose text matches the target language,
    /// preserving relative order. Embedded line breaks are collapsed to
    /// single spaces; no other whitespace normalization is performed.
    pub fn from_raw(
        raw: impl IntoIterator<Item = Segment>,
        language: TrackLanguage,
        filter: &ScriptFilter,
    ) -> Track {
        let segments = raw
            .into_iter()
            .map(|seg| Segment {
                text: seg.text.replace("\r\n", " ").replace(['\r', '\n'], " "),
                ..seg
            })
            .filter(|seg| filter.is_target(&seg.text, language))
            .collect();
        Track { language, segments }
    }

    /// Build a track from already-filtered segments
    pub fn from_segments(segments: Vec<Segment>, language: TrackLanguage) -> Track {
        Track { language, segments }
    }

    /// The track's language
    pub fn language(&self) -> TrackLanguage {
        self.language
    }

    /// The segments, in track order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the track holds no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A copy of this track stably sorted ascending by `start`
    ///
    /// The matcher requires ascending inputs; source files usually satisfy
    /// this already, but the ordering is not guaranteed by the format.
    pub fn sorted_by_start(&self) -> Track {
        let mut segments = self.segments.clone();
        segments.sort_by_key(|seg| seg.start);
        Track {
            language: self.language,
            segments,
        }
    }
}
