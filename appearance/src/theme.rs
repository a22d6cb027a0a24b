//! Theme values and the resolved appearance snapshot.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// A persisted or resolved color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map a resolved dark flag to a theme.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Storage representation: `"dark"` or `"light"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Surrounding whitespace is ignored; anything
    /// other than exactly `dark` or `light` yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the appearance handed to consumers and the render layer.
///
/// Always delivered whole, so a consumer never sees the dark flag from one
/// mutation paired with the pending flag from another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceState {
    pub is_dark: bool,
    pub is_pending: bool,
}

impl AppearanceState {
    /// Initial state before resolution: light and pending.
    #[must_use]
    pub fn unresolved() -> Self {
        Self { is_dark: false, is_pending: true }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        Theme::from_dark(self.is_dark)
    }
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self::unresolved()
    }
}
