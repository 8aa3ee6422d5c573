// src/models.rs
mod highlighted_line;
mod line_class;
mod session;
mod statistics;
mod theme;

pub use highlighted_line::HighlightedLine;
pub use line_class::LineClass;
pub use session::Session;
pub use statistics::Statistics;
pub use theme::Theme;
