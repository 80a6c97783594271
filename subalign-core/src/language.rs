//! Script-presence language classification
//!
//! Tracks are homogeneous in language, but subtitle files frequently mix a
//! Latin-script track with a second script (the reference deployment pairs
//! English with Korean). Classification is a binary script-presence
//! heuristic over one designated Unicode block, not language detection:
//! text containing at least one codepoint from the secondary block is
//! secondary, everything else is primary.

use std::ops::RangeInclusive;

/// Which of the two track languages a segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackLanguage {
    /// The reference-track language (no secondary-script codepoints)
    Primary,
    /// The comparison-track language (at least one secondary-script codepoint)
    Secondary,
}

/// Classifies text by presence of a designated secondary-script block
#[derive(Debug, Clone)]
pub struct ScriptFilter {
    block: RangeInclusive<char>,
}

impl Default for ScriptFilter {
    /// Hangul syllables, U+AC00..=U+D7A3
    fn default() -> Self {
        ScriptFilter::new('\u{AC00}'..='\u{D7A3}')
    }
}

impl ScriptFilter {
    /// Create a filter over a custom secondary-script block
    pub fn new(block: RangeInclusive<char>) -> Self {
        ScriptFilter { block }
    }

    /// True if the text contains any codepoint in the secondary block
    pub fn contains_secondary(&self, text: &str) -> bool {
        text.chars().any(|ch| self.block.contains(&ch))
    }

    /// Classify text; empty text has no secondary codepoints and is primary
    pub fn classify(&self, text: &str) -> TrackLanguage {
        if self.contains_secondary(text) {
            TrackLanguage::Secondary
        } else {
            TrackLanguage::Primary
        }
    }

    /// Predicate form: does the text belong to the given language?
    pub fn is_target(&self, text: &str, language: TrackLanguage) -> bool {
        self.classify(text) == language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_primary() {
        let filter = ScriptFilter::default();
        assert_eq!(filter.classify("Hello there."), TrackLanguage::Primary);
    }

    #[test]
    fn hangul_text_is_secondary() {
        let filter = ScriptFilter::default();
        assert_eq!(filter.classify("안녕하세요."), TrackLanguage::Secondary);
    }

    #[test]
    fn mixed_text_classifies_by_presence() {
        // One Hangul codepoint is enough, regardless of surrounding script
        let filter = ScriptFilter::default();
        assert_eq!(filter.classify("OK 네"), TrackLanguage::Secondary);
    }

    #[test]
    fn empty_text_is_primary() {
        let filter = ScriptFilter::default();
        assert_eq!(filter.classify(""), TrackLanguage::Primary);
        assert!(filter.is_target("", TrackLanguage::Primary));
        assert!(!filter.is_target("", TrackLanguage::Secondary));
    }

    #[test]
    fn custom_block() {
        // Hiragana block instead of Hangul
        let filter = ScriptFilter::new('\u{3040}'..='\u{309F}');
        assert_eq!(filter.classify("これはテスト"), TrackLanguage::Secondary);
        assert_eq!(filter.classify("안녕"), TrackLanguage::Primary);
    }
}
