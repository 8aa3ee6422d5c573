// src/models/highlighted_line.rs
use crate::models::LineClass;

/// One line of the document split at its comment boundary.
///
/// Both parts borrow from the source text unchanged, so the original line is
/// always `code` followed by `comment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    pub class: LineClass,
    pub code: &'a str,
    pub comment: Option<&'a str>,
}

impl HighlightedLine<'_> {
    /// Reassembles the original line.
    #[must_use]
    pub fn source(&self) -> String {
        let mut line = String::from(self.code);
        if let Some(comment) = self.comment {
            line.push_str(comment);
        }
        line
    }
}
