//! # xmq-theme
//!
//! Light/dark theme toggle for static pages rendered by xmq, compiled to
//! WebAssembly and loaded next to the generated HTML.
//!
//! The preference lives in a `background` cookie. Applying a theme projects it
//! onto the page root class, onto every `xmq`-tagged block, and onto any
//! configured link or form target that carries the theme in its URL. The
//! crate also switches between the two parallel renderings of a page
//! (`*_xml.html` and `*_xmq.html`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The [`theme::Theme`] value and its class names |
//! | [`cookie`] | Preference cookie serialization and parsing |
//! | [`variant`] | Document variant suffix substitution |
//! | [`config`] | Page configuration ([`config::ThemeConfig`]) |
//! | [`document`] | The [`document::ThemeDocument`] seam and an in-memory model |
//! | [`controller`] | [`controller::ThemeController`], the testable core |
//! | [`style`] | Stylesheet for themed blocks |
//! | [`page`] | Page-level handlers bound to UI controls |
//! | [`components`] | Leptos toggle control |
//! | `browser` | web-sys document adapter and JS exports (`csr` only) |

pub mod components;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod document;
pub mod error;
pub mod page;
pub mod style;
pub mod theme;
pub mod variant;

#[cfg(feature = "csr")]
pub mod browser;

pub use controller::{ThemeController, ThemeState};
pub use error::ThemeError;
pub use theme::Theme;
