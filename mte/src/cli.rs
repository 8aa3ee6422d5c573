// src/cli.rs
use anyhow::{Context as _, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::document::{
    filename_base, normalize_title, render_page, replace_with_upload, write_download,
};
use crate::core::highlight::render_highlight;
use crate::core::session::{DEFAULT_SESSION_FILE, load_session, save_session};
use crate::core::stats::compute_statistics_with;
use crate::core::stats::words::WordStrategy;
use crate::models::Theme;
use crate::utils::{read_input, system_prefers_dark, write_statistics};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyse ("-" for stdin; defaults to the saved session text)
    pub file: Option<PathBuf>,

    /// Session file holding the saved text, theme and title
    #[arg(short, long, default_value = DEFAULT_SESSION_FILE)]
    pub session: PathBuf,

    /// Print highlight markup instead of statistics
    #[arg(short = 'H', long)]
    pub highlight: bool,

    /// Wrap the highlight markup in a standalone HTML page
    #[arg(short, long)]
    pub page: bool,

    /// Write markup to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document text
    #[arg(long)]
    pub print: bool,

    /// Save the document text as "<title>.txt" into this directory
    #[arg(short, long)]
    pub download: Option<PathBuf>,

    /// Replace the saved text with the contents of this file
    #[arg(short, long)]
    pub upload: Option<PathBuf>,

    /// Allow --upload to replace text that is not empty
    #[arg(short, long)]
    pub force: bool,

    /// Set the document title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Set the colour theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// How words are counted
    #[arg(short, long, value_enum, default_value_t = WordStrategy::Segmenter)]
    pub words: WordStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Switch away from the current theme
    Toggle,
}

impl ThemeChoice {
    #[inline]
    #[must_use]
    pub const fn resolve(self, current: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Toggle => current.toggled(),
        }
    }
}

/// Applies session changes from `args`, then prints the requested view of
/// the document.
///
/// # Errors
///
/// This function may return an error if:
/// * The session file cannot be read, parsed or saved
/// * An input or upload file cannot be read
/// * An upload would replace non-empty text without `--force`
/// * A download or markup file cannot be written
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Same as [`run`], with everything meant for stdout written to `out`.
///
/// # Errors
///
/// See [`run`]; also fails if writing to `out` fails.
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let mut session = load_session(&args.session)?;
    let mut changed = false;

    if let Some(choice) = args.theme {
        let current = Theme::infer(session.saved_theme(), system_prefers_dark());
        session.set_theme(choice.resolve(current));
        changed = true;
    }

    if let Some(title) = &args.title {
        session.title = Some(normalize_title(title));
        changed = true;
    }

    if let Some(path) = &args.upload {
        let contents = read_input(path)?;
        replace_with_upload(&mut session, contents, args.force)?;
        info!(path = %path.display(), "uploaded file replaced session text");
        changed = true;
    }

    if changed {
        save_session(&args.session, &session)?;
    }

    let text = match &args.file {
        Some(path) => read_input(path)?,
        None => session.text().to_owned(),
    };
    debug!(bytes = text.len(), "document loaded");

    if args.print {
        write!(out, "{text}")?;
    } else if let Some(dir) = &args.download {
        let base = filename_base(session.restored_title(), Local::now().date_naive());
        let path = write_download(dir, &base, &text)?;
        writeln!(out, "Saved {}", path.display())?;
    } else if args.highlight || args.page {
        let fragment = render_highlight(&text);
        let markup = if args.page {
            let title = normalize_title(session.restored_title().unwrap_or_default());
            let theme = Theme::infer(session.saved_theme(), system_prefers_dark());
            render_page(&fragment, &title, theme)
        } else {
            fragment
        };

        match &args.output {
            Some(path) => fs::write(path, markup)
                .with_context(|| format!("Failed to write markup: {}", path.display()))?,
            None => writeln!(out, "{markup}")?,
        }
    } else {
        let stats = compute_statistics_with(&text, args.words);
        write_statistics(out, &stats)?;
    }

    Ok(())
}
