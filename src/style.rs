//! Stylesheet for the themed page.
//!
//! Colors are the xmq HTML renderer's block palette, so blocks produced by
//! `xmq render-html` look the same whether their initial mode was baked in at
//! render time or applied here.

use std::fmt::Write as _;

use crate::config::ThemeConfig;
use crate::theme::Theme;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub foreground: &'static str,
}

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self { background: "#263338", border: "#555555", foreground: "white" },
            Theme::Light => Self { background: "#f8f9fb", border: "#888888", foreground: "black" },
        }
    }
}

/// CSS for the root classes and the `pre` block modifiers.
#[must_use]
pub fn stylesheet(config: &ThemeConfig) -> String {
    let mut css = String::new();
    for theme in [Theme::Dark, Theme::Light] {
        let p = Palette::for_theme(theme);
        let _ = writeln!(
            css,
            "{}.{}{{background-color:{};color:{};}}",
            config.root.selector(),
            theme.as_str(),
            p.background,
            p.foreground
        );
        let _ = writeln!(
            css,
            "pre.{}{{border-radius:2px;background-color:{};border:solid 1px {};display:inline-block;padding:1em;color:{};}}",
            theme.modifier_class(&config.modifier_prefix),
            p.background,
            p.border,
            p.foreground
        );
    }
    css
}
