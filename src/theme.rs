//! The two-valued page theme.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page background theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the root class and the persisted preference value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Classify a non-empty stored preference value.
    ///
    /// Only a value starting with `dark` selects [`Theme::Dark`]; anything
    /// else, including unknown values, is light.
    #[must_use]
    pub fn from_preference(value: &str) -> Self {
        if value.starts_with(Self::Dark.as_str()) { Self::Dark } else { Self::Light }
    }

    /// Modifier class for themed blocks, e.g. `xmq_dark` for prefix `xmq_`.
    #[must_use]
    pub fn modifier_class(self, prefix: &str) -> String {
        format!("{prefix}{}", self.as_str())
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
