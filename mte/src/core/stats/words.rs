// src/core/stats/words.rs
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation as _;

/// Alphanumeric runs, optionally joined by single internal apostrophes ("don't").
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z0-9]+)*").expect("word pattern is a valid regex")
});

/// A way of counting words in already-trimmed, non-empty text.
pub trait WordCounter {
    fn count(&self, text: &str) -> usize;
}

/// Counts word-like segments found at Unicode (UAX #29) word boundaries.
///
/// A segment is word-like when it holds at least one alphanumeric character,
/// so punctuation and whitespace segments are skipped. Works across scripts,
/// including ones that do not separate words with spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmenterWordCounter;

impl WordCounter for SegmenterWordCounter {
    #[inline]
    fn count(&self, text: &str) -> usize {
        text.unicode_words().count()
    }
}

/// ASCII-only fallback that counts runs of `[A-Za-z0-9]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternWordCounter;

impl WordCounter for PatternWordCounter {
    #[inline]
    fn count(&self, text: &str) -> usize {
        WORD_PATTERN.find_iter(text).count()
    }
}

/// Selects which [`WordCounter`] the statistics engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WordStrategy {
    /// Unicode word boundaries
    #[default]
    Segmenter,
    /// ASCII alphanumeric pattern
    Pattern,
}

impl WordStrategy {
    #[inline]
    #[must_use]
    pub fn counter(self) -> &'static dyn WordCounter {
        match self {
            Self::Segmenter => &SegmenterWordCounter,
            Self::Pattern => &PatternWordCounter,
        }
    }
}
