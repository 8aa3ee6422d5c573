// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, ThemeChoice, run, run_with_output};
pub use crate::core::document::{
    DEFAULT_TITLE, default_filename_base, filename_base, normalize_title, render_page,
    replace_with_upload, sanitize_filename_base, write_download,
};
pub use crate::core::highlight::markup::{SPACE_MARKER, TAB_WIDTH, escape_html, mark_whitespace};
pub use crate::core::highlight::{
    classify_line, find_comment_start, highlight_line, highlight_lines, render_highlight,
    render_line, split_comment,
};
pub use crate::core::session::{DEFAULT_SESSION_FILE, load_session, save_session};
pub use crate::core::stats::words::{PatternWordCounter, SegmenterWordCounter, WordCounter, WordStrategy};
pub use crate::core::stats::{
    WPM, compute_statistics, compute_statistics_with, count_paragraphs, count_sentences,
    count_words, count_words_with, format_duration, reading_time, reading_time_seconds,
};
pub use models::{HighlightedLine, LineClass, Session, Statistics, Theme};
