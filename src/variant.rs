//! URL rewriting: document variant suffixes and embedded theme markers.
//!
//! Both rewrites are literal substitutions of the first occurrence, the same
//! semantics as `String.prototype.replace` with a string pattern.

use serde::{Deserialize, Serialize};

use crate::config::VariantSuffixes;
use crate::theme::Theme;

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

/// The two parallel renderings of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentVariant {
    Xml,
    Xmq,
}

impl DocumentVariant {
    #[must_use]
    pub fn suffix(self, suffixes: &VariantSuffixes) -> &str {
        match self {
            Self::Xml => &suffixes.xml,
            Self::Xmq => &suffixes.xmq,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Xml => Self::Xmq,
            Self::Xmq => Self::Xml,
        }
    }

    /// The variant whose suffix appears in `url`.
    ///
    /// When both appear, the one occurring last wins, since the file name
    /// comes after any directory that happens to contain a suffix.
    #[must_use]
    pub fn detect(url: &str, suffixes: &VariantSuffixes) -> Option<Self> {
        let xml = url.rfind(suffixes.xml.as_str());
        let xmq = url.rfind(suffixes.xmq.as_str());
        match (xml, xmq) {
            (Some(a), Some(b)) => Some(if a > b { Self::Xml } else { Self::Xmq }),
            (Some(_), None) => Some(Self::Xml),
            (None, Some(_)) => Some(Self::Xmq),
            (None, None) => None,
        }
    }
}

/// Rewrite `url` so it points at the `target` rendering.
///
/// Returns `None` when `url` holds no suffix of the other rendering, which
/// includes a URL already pointing at `target`.
#[must_use]
pub fn rewrite_url(url: &str, target: DocumentVariant, suffixes: &VariantSuffixes) -> Option<String> {
    replace_first(url, target.opposite().suffix(suffixes), target.suffix(suffixes))
}

/// Rewrite the first `<prefix><other theme>` marker in `value` to name `theme`.
///
/// Returns `None` when no marker for the other theme is present.
#[must_use]
pub fn rewrite_theme_marker(value: &str, prefix: &str, theme: Theme) -> Option<String> {
    let from = format!("{prefix}{}", theme.opposite().as_str());
    let to = format!("{prefix}{}", theme.as_str());
    replace_first(value, &from, &to)
}

fn replace_first(haystack: &str, from: &str, to: &str) -> Option<String> {
    if from.is_empty() || !haystack.contains(from) {
        return None;
    }
    Some(haystack.replacen(from, to, 1))
}
