// src/core/highlight/markup.rs

/// Visible placeholder emitted for each literal space.
pub const SPACE_MARKER: &str = r#"<span class="tok-space">•</span>"#;

/// Number of space markers emitted for one tab.
pub const TAB_WIDTH: usize = 4;

/// Escapes `&`, `<` and `>` so the text can sit inside HTML markup.
///
/// `&` is handled first so the entities introduced for `<` and `>` are never
/// escaped a second time.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replaces each space with one [`SPACE_MARKER`] and each tab with
/// [`TAB_WIDTH`] of them. Expects already-escaped text.
#[must_use]
pub fn mark_whitespace(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            ' ' => out.push_str(SPACE_MARKER),
            '\t' => {
                for _ in 0..TAB_WIDTH {
                    out.push_str(SPACE_MARKER);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Escapes then marks whitespace, the full treatment applied to a line part.
#[inline]
#[must_use]
pub fn render_text(raw: &str) -> String {
    mark_whitespace(&escape_html(raw))
}
