//! Preference cookie serialization and parsing.
//!
//! `document.cookie` reads back as `a=1; background=dark; b=2` with all
//! attributes stripped, in no guaranteed order. The preference is looked up
//! by name rather than by position.

use crate::config::CookieConfig;
use crate::theme::Theme;

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Build the assignment string for `document.cookie`.
#[must_use]
pub fn to_assignment(config: &CookieConfig, theme: Theme) -> String {
    let mut assignment = format!(
        "{}={};expires={};path={};SameSite={}",
        config.name,
        theme.as_str(),
        config.expires,
        config.path,
        config.same_site.as_str()
    );
    if config.same_site.requires_secure() {
        assignment.push_str(";Secure");
    }
    assignment
}

/// Iterate the `name=value` pairs of a cookie string, trimmed.
///
/// Segments without `=` are skipped.
pub fn pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// Value of the first cookie called `name`, if it is non-empty.
#[must_use]
pub fn value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    pairs(raw)
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Stored theme preference, or `None` when no usable cookie is present.
#[must_use]
pub fn read_preference(raw: &str, config: &CookieConfig) -> Option<Theme> {
    value(raw, &config.name).map(Theme::from_preference)
}
