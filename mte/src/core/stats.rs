// src/core/stats.rs
pub mod words;

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use crate::core::{is_space, trim_space};
use crate::models::Statistics;
use words::{WordCounter, WordStrategy};

/// Reading speed used for the reading time estimate, in words per minute.
pub const WPM: u32 = 200;

static SENTENCE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminator pattern is a valid regex"));

/// A newline, any whitespace (blank lines included), then at least one more newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[\s\x{FEFF}]*\n+").expect("paragraph pattern is a valid regex"));

/// Computes every document statistic using Unicode word segmentation.
///
/// Never fails: empty and whitespace-only text produce all-zero counts and a
/// zero reading time.
///
/// # Examples
///
/// ```
/// let stats = mte::compute_statistics("Hello world.");
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.sentences, 1);
/// ```
#[inline]
#[must_use]
pub fn compute_statistics(text: &str) -> Statistics {
    compute_statistics_with(text, WordStrategy::default())
}

/// Computes every document statistic with the given word counting strategy.
#[must_use]
pub fn compute_statistics_with(text: &str, strategy: WordStrategy) -> Statistics {
    let words = count_words_with(text, strategy.counter());
    Statistics {
        characters: text.chars().count(),
        words,
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        reading_time: reading_time(words),
    }
}

#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    count_words_with(text, WordStrategy::default().counter())
}

/// Counts words with an explicit counter. Surrounding whitespace is trimmed
/// before the counter sees the text.
#[must_use]
pub fn count_words_with(text: &str, counter: &dyn WordCounter) -> usize {
    let trimmed = trim_space(text);
    if trimmed.is_empty() {
        return 0;
    }
    counter.count(trimmed)
}

/// Counts runs of `.`, `!` or `?` that are followed by whitespace or the end
/// of the text. A run such as `?!` is a single terminator, and a final
/// sentence without punctuation is not counted.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    let trimmed = trim_space(text);
    if trimmed.is_empty() {
        return 0;
    }

    SENTENCE_TERMINATOR
        .find_iter(trimmed)
        .filter(|m| {
            trimmed
                .get(m.end()..)
                .and_then(|rest| rest.chars().next())
                .is_none_or(is_space)
        })
        .count()
}

/// Counts the pieces produced by splitting the trimmed text on blank-line
/// breaks. Pieces are counted as split, without filtering.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    let trimmed = trim_space(text);
    if trimmed.is_empty() {
        return 0;
    }
    PARAGRAPH_BREAK.split(trimmed).count()
}

#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "Word counts stay far below 2^52")]
pub fn reading_time_seconds(words: usize) -> f64 {
    words as f64 / f64::from(WPM) * 60.0
}

#[inline]
#[must_use]
pub fn reading_time(words: usize) -> Duration {
    Duration::from_secs_f64(reading_time_seconds(words))
}

/// Renders a number of seconds as a short human label.
///
/// The value is rounded to the nearest second and clamped at zero.
///
/// # Examples
///
/// ```
/// use mte::format_duration;
///
/// assert_eq!(format_duration(45.0), "45 sec");
/// assert_eq!(format_duration(90.0), "1 min 30 sec");
/// assert_eq!(format_duration(3661.0), "1 hr 01 min 01 sec");
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is rounded and clamped to be non-negative first; the cast saturates"
)]
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    if total < 60 {
        return format!("{total} sec");
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours} hr {minutes:02} min {secs:02} sec")
    } else {
        format!("{minutes} min {secs} sec")
    }
}
