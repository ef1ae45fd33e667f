//! Leptos controls wired to the page handlers.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;
