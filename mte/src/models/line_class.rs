// src/models/line_class.rs

/// Semantic category of a line, taken from how its code part begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineClass {
    #[default]
    None,
    /// `#` heading
    Hash,
    /// `- ` bullet
    Minus,
    /// `+ ` bullet
    Plus,
    /// `[x]` checked item
    Done,
    /// `**` emphasis
    Star,
    /// `>` quote
    Quote,
}

impl LineClass {
    #[inline]
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Hash => Some("tok-hash"),
            Self::Minus => Some("tok-minus"),
            Self::Plus => Some("tok-plus"),
            Self::Done => Some("tok-done"),
            Self::Star => Some("tok-star"),
            Self::Quote => Some("tok-quote"),
        }
    }
}
