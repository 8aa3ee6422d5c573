// src/core/document.rs
use anyhow::{Context as _, Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::info;

use crate::core::highlight::markup::escape_html;
use crate::models::{Session, Theme};

pub const DEFAULT_TITLE: &str = "Minimal Text Editor";

const FILENAME_MAX_CHARS: usize = 60;

static FORBIDDEN_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|]+"#).expect("filename pattern is a valid regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Trims a title; a blank title becomes [`DEFAULT_TITLE`].
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        String::from(DEFAULT_TITLE)
    } else {
        trimmed.to_owned()
    }
}

/// Turns arbitrary text into a portable file name stem.
///
/// Runs of characters that are invalid in file names become `-`, whitespace
/// runs become a single space, and the result is cut to 60 characters.
/// Falls back to `"document"` when nothing usable remains.
#[must_use]
pub fn sanitize_filename_base(raw: &str) -> String {
    let replaced = FORBIDDEN_FILENAME_CHARS.replace_all(raw.trim(), "-");
    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    let base: String = collapsed.chars().take(FILENAME_MAX_CHARS).collect();
    if base.is_empty() {
        String::from("document")
    } else {
        base
    }
}

/// `document-YYYY-MM-DD` for the given day.
#[inline]
#[must_use]
pub fn default_filename_base(date: NaiveDate) -> String {
    format!("document-{}", date.format("%Y-%m-%d"))
}

/// The file name stem used for downloads: the sanitized title, or a dated
/// default when there is no title.
#[must_use]
pub fn filename_base(title: Option<&str>, today: NaiveDate) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => sanitize_filename_base(title),
        None => default_filename_base(today),
    }
}

/// Replaces the session text with uploaded contents.
///
/// # Errors
///
/// Refuses to overwrite non-blank text unless `force` is set. The session is
/// left untouched in that case.
pub fn replace_with_upload(session: &mut Session, contents: String, force: bool) -> Result<()> {
    if !force && !session.text().trim().is_empty() {
        bail!("Refusing to replace the current text with the uploaded file contents (use --force)");
    }
    session.text = Some(contents);
    Ok(())
}

/// Writes `text` to `<dir>/<base>.txt` as UTF-8 and returns the path.
///
/// # Errors
///
/// This function may return an error if the file cannot be written.
pub fn write_download(dir: &Path, base: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{base}.txt"));
    fs::write(&path, text)
        .with_context(|| format!("Failed to write download: {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "document downloaded");
    Ok(path)
}

const PAGE_STYLE: &str = "\
:root { --fg: #1d1d1f; --bg: #ffffff; --muted: #8e8e93; --accent: #0a84ff; }
:root[data-theme=\"dark\"] { --fg: #f5f5f7; --bg: #000000; --muted: #636366; --accent: #64d2ff; }
body { margin: 0; color: var(--fg); background: var(--bg); }
pre { margin: 0; padding: 1.5rem; font: 15px/1.6 ui-monospace, monospace; white-space: pre-wrap; }
.tok-space { color: var(--muted); opacity: 0.35; }
.tok-comment { color: var(--muted); font-style: italic; }
.tok-hash { color: var(--accent); font-weight: 700; }
.tok-minus, .tok-plus { color: var(--accent); }
.tok-done { color: var(--muted); text-decoration: line-through; }
.tok-star { font-weight: 700; }
.tok-quote { color: var(--muted); border-left: 3px solid var(--muted); }
";

/// Wraps a highlight fragment in a standalone HTML page.
#[must_use]
pub fn render_page(fragment: &str, title: &str, theme: Theme) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{PAGE_STYLE}</style>\n</head>\n<body>\n<pre class=\"highlight\">{fragment}</pre>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}
