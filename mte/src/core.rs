// src/core.rs
pub mod document;
pub mod highlight;
pub mod session;
pub mod stats;

/// Whitespace as text boundaries see it: Unicode White_Space plus the
/// byte order mark, which uploaded files often start with.
#[inline]
#[must_use]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[inline]
#[must_use]
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}
