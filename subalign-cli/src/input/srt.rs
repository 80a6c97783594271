//! SRT file reading
//!
//! The upstream collaborator the core delegates parsing to. Files are
//! decoded as UTF-8 lossily (subtitle files in the wild carry stray bytes)
//! and parsed block-wise: an optional sequence-number line, a timestamp
//! line, then text lines until a blank line.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use subalign_core::{AlignError, ScriptFilter, Segment, TimeOffset, Track, TrackLanguage};

static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2})[,.](\d{3}) --> (\d{2}):(\d{2}):(\d{2})[,.](\d{3})")
        .expect("timestamp regex is valid")
});

/// Reads SRT files into language-filtered tracks
pub struct SrtReader;

impl SrtReader {
    /// Read a subtitle file and keep only segments in `language`
    pub fn read_track(
        path: &Path,
        language: TrackLanguage,
        filter: &ScriptFilter,
    ) -> Result<Track> {
        Self::validate_extension(path)?;
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read subtitle file: {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);

        let raw = Self::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let track = Track::from_raw(raw, language, filter);
        log::info!(
            "{}: {} segments after {:?} filtering",
            path.display(),
            track.len(),
            language
        );
        Ok(track)
    }

    /// Reject anything that is not an `.srt` file
    fn validate_extension(path: &Path) -> Result<()> {
        let is_srt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("srt"));
        if !is_srt {
            bail!(AlignError::Validation(format!(
                "{} is not an SRT file",
                path.display()
            )));
        }
        Ok(())
    }

    /// Parse SRT content into raw segments
    pub fn parse(content: &str) -> Result<Vec<Segment>> {
        let content = content.replace("\r\n", "\n");
        let mut segments = Vec::new();

        for block in content.split("\n\n") {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim_end)
                .skip_while(|line| line.trim().is_empty())
                .collect();
            if lines.is_empty() {
                continue;
            }

            let Some(ts_line) = lines.iter().position(|line| TIMESTAMP_REGEX.is_match(line))
            else {
                // Stray block without a timestamp line; tolerated unless
                // the whole file turns out to contain no segments at all
                log::debug!("skipping block without timestamp line: {:?}", lines[0]);
                continue;
            };

            let captures = TIMESTAMP_REGEX
                .captures(lines[ts_line])
                .expect("line already matched");
            let start = Self::timestamp_from_captures(&captures, 1)?;
            let end = Self::timestamp_from_captures(&captures, 5)?;

            let text = lines[ts_line + 1..].join("\n");
            segments.push(Segment::new(start, end, text));
        }

        if segments.is_empty() && !content.trim().is_empty() {
            bail!(AlignError::Format(
                "no timestamped segments found".to_string()
            ));
        }
        Ok(segments)
    }

    fn timestamp_from_captures(captures: &regex::Captures<'_>, first_group: usize) -> Result<TimeOffset> {
        let part = |group: usize| -> Result<i64> {
            captures[group]
                .parse::<i64>()
                .context("invalid timestamp component")
        };
        let (hours, minutes) = (part(first_group)?, part(first_group + 1)?);
        let (seconds, millis) = (part(first_group + 2)?, part(first_group + 3)?);
        if minutes >= 60 || seconds >= 60 {
            bail!(AlignError::Format(format!(
                "invalid time components in {:02}:{:02}:{:02}",
                hours, minutes, seconds
            )));
        }
        Ok(TimeOffset::from_components(hours, minutes, seconds, millis))
    }
}
