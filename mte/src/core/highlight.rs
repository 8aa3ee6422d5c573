// src/core/highlight.rs
pub mod markup;

use crate::core::is_space;
use crate::models::{HighlightedLine, LineClass};
use markup::render_text;

/// Finds the byte index of the first `//` that is not preceded by `:`.
///
/// The colon rule keeps URLs such as `http://example.com` intact. Only the
/// leftmost valid match is reported.
#[must_use]
pub fn find_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    bytes
        .windows(2)
        .enumerate()
        .find(|&(i, pair)| pair == b"//" && (i == 0 || bytes[i - 1] != b':'))
        .map(|(i, _)| i)
}

/// Splits a line into its code part and its trailing comment, if any.
#[inline]
#[must_use]
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    match find_comment_start(line) {
        // `/` is ASCII, so the index is always a char boundary.
        Some(index) => {
            let (code, comment) = line.split_at(index);
            (code, Some(comment))
        }
        None => (line, None),
    }
}

/// Classifies the code part of a line by its first non-whitespace content.
///
/// Rules are checked in a fixed order and the first match wins.
#[must_use]
pub fn classify_line(code: &str) -> LineClass {
    let body = code.trim_start_matches(is_space);
    if body.starts_with('#') {
        LineClass::Hash
    } else if body.starts_with("- ") {
        LineClass::Minus
    } else if body.starts_with("+ ") {
        LineClass::Plus
    } else if body.get(..3).is_some_and(|head| head.eq_ignore_ascii_case("[x]")) {
        LineClass::Done
    } else if body.starts_with("**") {
        LineClass::Star
    } else if body.starts_with('>') {
        LineClass::Quote
    } else {
        LineClass::None
    }
}

/// Splits and classifies a single line (which must not contain `\n`).
#[must_use]
pub fn highlight_line(line: &str) -> HighlightedLine<'_> {
    let (code, comment) = split_comment(line);
    HighlightedLine {
        class: classify_line(code),
        code,
        comment,
    }
}

/// Splits and classifies every line of `text`, in order.
///
/// Empty text yields no lines at all rather than one empty line.
#[must_use]
pub fn highlight_lines(text: &str) -> Vec<HighlightedLine<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(highlight_line).collect()
}

/// Renders one highlighted line as an HTML fragment.
#[must_use]
pub fn render_line(line: &HighlightedLine<'_>) -> String {
    let code = render_text(line.code);
    let mut out = match line.class.css_class() {
        Some(class) => format!(r#"<span class="{class}">{code}</span>"#),
        None => code,
    };
    if let Some(comment) = line.comment {
        out.push_str(r#"<span class="tok-comment">"#);
        out.push_str(&render_text(comment));
        out.push_str("</span>");
    }
    out
}

/// Renders the highlight overlay for a whole document.
///
/// Each input line becomes one rendered line, joined with `\n`.
///
/// # Examples
///
/// ```
/// let html = mte::render_highlight("# Title");
/// assert_eq!(html, r#"<span class="tok-hash">#<span class="tok-space">•</span>Title</span>"#);
/// ```
#[must_use]
pub fn render_highlight(text: &str) -> String {
    highlight_lines(text)
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}
