// src/utils.rs
use anyhow::{Context as _, Result};
use std::env;
use std::fs;
use std::io::{self, Read as _, Write};
use std::path::Path;

use crate::models::Statistics;

/// Reads a whole text document from `path`, or from stdin when it is `-`.
///
/// # Errors
///
/// This function may return an error if the file or stdin cannot be read as
/// UTF-8 text.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Whether the terminal advertises a dark background through `COLORFGBG`.
#[must_use]
pub fn system_prefers_dark() -> bool {
    env::var("COLORFGBG").is_ok_and(|value| colorfgbg_is_dark(&value))
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background colours
/// 0-6 and 8 are the dark half of the 16-colour palette.
fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 0..=6 | 8))
}

/// Writes the statistics panel followed by a newline.
///
/// # Errors
///
/// This function may return an error if `out` cannot be written.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{stats}")
}
