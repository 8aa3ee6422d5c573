// src/core/session.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::models::Session;

/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".mte-session.toml";

/// Loads the session stored at `path`.
///
/// A missing file is not an error and yields an empty session.
///
/// # Arguments
///
/// * `path` - The session file to read
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read as UTF-8 text
/// * The file is not a valid session document
#[inline]
pub fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        debug!(path = %path.display(), "no session file, starting empty");
        return Ok(Session::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse session file: {}", path.display()))
}

/// Writes the session to `path`, replacing any previous file atomically.
///
/// The document is written to a temporary file beside `path` first, so a
/// failed save never leaves a truncated session behind.
///
/// # Errors
///
/// This function may return an error if:
/// * The session cannot be serialized
/// * The temporary file cannot be created or written
/// * The temporary file cannot be moved over `path`
#[inline]
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    let content = toml::to_string(session).context("Failed to serialize session")?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    file.write_all(content.as_bytes())
        .context("Failed to write session contents")?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save session file: {}", path.display()))?;

    info!(path = %path.display(), "session saved");
    Ok(())
}
