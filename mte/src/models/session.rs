// src/models/session.rs
use serde::{Deserialize, Serialize};

use crate::models::Theme;

/// Editor state persisted between runs under fixed storage keys.
///
/// The theme is kept as the raw stored string so an unrecognised value only
/// loses the theme, not the whole session.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "mte_text_v1", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "mte_theme_v1", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "mte_title_v1", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Session {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// The stored theme, if it is one we recognise.
    #[inline]
    #[must_use]
    pub fn saved_theme(&self) -> Option<Theme> {
        self.theme.as_deref().and_then(|t| t.parse().ok())
    }

    #[inline]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme.as_str().to_owned());
    }

    /// The stored title, ignored when blank.
    #[inline]
    #[must_use]
    pub fn restored_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}
