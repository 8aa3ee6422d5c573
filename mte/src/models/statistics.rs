// src/models/statistics.rs
use std::fmt;
use std::time::Duration;

use crate::core::stats::format_duration;

/// Counts derived from a document's text, plus the estimated reading time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time: Duration,
}

impl Statistics {
    /// Reading time as shown in the statistics panel, e.g. `"1 min 30 sec"`.
    #[inline]
    #[must_use]
    pub fn reading_time_label(&self) -> String {
        format_duration(self.reading_time.as_secs_f64())
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters:   {}", self.characters)?;
        writeln!(f, "Words:        {}", self.words)?;
        writeln!(f, "Sentences:    {}", self.sentences)?;
        writeln!(f, "Paragraphs:   {}", self.paragraphs)?;
        write!(f, "Reading time: {}", self.reading_time_label())
    }
}
