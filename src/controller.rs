//! Theme state and its projection onto the document.
//!
//! DESIGN
//! ======
//! [`ThemeState`] is the source of truth. Every apply writes it to the cookie
//! and recomputes the DOM classes and navigation targets from it, so a page
//! never reads its own theme back out of the class list.
//!
//! Each projection step degrades on its own: a missing root, an empty set of
//! themed blocks, an absent upload form, or a throwing DOM call is logged and
//! skipped while the remaining steps still run.

use crate::config::ThemeConfig;
use crate::cookie;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::theme::Theme;
use crate::variant::{self, DocumentVariant};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Theme currently applied by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

/// Owns the page configuration, the theme state, and the document it projects
/// onto.
pub struct ThemeController<D> {
    config: ThemeConfig,
    state: ThemeState,
    doc: D,
}

impl<D: ThemeDocument> ThemeController<D> {
    /// The initial state mirrors the theme the page was rendered with.
    #[must_use]
    pub fn new(config: ThemeConfig, doc: D) -> Self {
        let mut controller = Self { config, state: ThemeState::default(), doc };
        controller.sync_state_from_root();
        controller
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    #[must_use]
    pub fn into_document(self) -> D {
        self.doc
    }

    // --- Theme ---

    pub fn apply_light(&mut self) {
        self.apply(Theme::Light);
    }

    pub fn apply_dark(&mut self) {
        self.apply(Theme::Dark);
    }

    /// Persist `theme` and project it onto the document.
    pub fn apply(&mut self, theme: Theme) {
        self.state.theme = theme;

        let assignment = cookie::to_assignment(&self.config.cookie, theme);
        if let Err(e) = self.doc.set_cookie(&assignment) {
            log::warn!("theme cookie write failed: {e}");
        }

        let root = self.config.root;
        match self.doc.swap_root_class(root, theme.opposite().as_str(), theme.as_str()) {
            Ok(true) => {}
            Ok(false) => log::debug!("no <{}> element, root class skipped", root.selector()),
            Err(e) => log::warn!("root class update failed: {e}"),
        }

        let prefix = &self.config.modifier_prefix;
        let remove = theme.opposite().modifier_class(prefix);
        let add = theme.modifier_class(prefix);
        let themed = match self.doc.swap_marked_classes(&self.config.marker_class, &remove, &add) {
            Ok(count) => count,
            Err(e) => {
                log::warn!("themed block update failed: {e}");
                0
            }
        };

        let rewritten = self.rewrite_nav_targets(theme);
        log::debug!("applied theme={theme} themed_blocks={themed} nav_targets_rewritten={rewritten}");
    }

    /// Apply the opposite of the current theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.theme.opposite();
        self.apply(next);
        next
    }

    /// Apply the theme stored in the preference cookie.
    ///
    /// Without a stored preference nothing is touched and `None` is
    /// returned, leaving whatever theme the page was rendered with.
    pub fn restore_from_preference(&mut self) -> Option<Theme> {
        let raw = match self.doc.cookie() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("cookie read failed: {e}");
                return None;
            }
        };
        let Some(theme) = cookie::read_preference(&raw, &self.config.cookie) else {
            log::debug!("no stored theme preference");
            self.sync_state_from_root();
            return None;
        };
        self.apply(theme);
        Some(theme)
    }

    /// Read the theme back from the root class without touching the page.
    ///
    /// A root carrying the dark class is dark; anything else, including a
    /// missing root, is light.
    fn sync_state_from_root(&mut self) {
        let dark = match self.doc.has_root_class(self.config.root, Theme::Dark.as_str()) {
            Ok(dark) => dark,
            Err(e) => {
                log::warn!("root class read failed: {e}");
                false
            }
        };
        self.state.theme = if dark { Theme::Dark } else { Theme::Light };
    }

    fn rewrite_nav_targets(&mut self, theme: Theme) -> usize {
        let mut rewritten = 0;
        for target in &self.config.nav_targets {
            let current = match self.doc.attribute(&target.element_id, &target.attribute) {
                Ok(Some(value)) => value,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("reading #{} {} failed: {e}", target.element_id, target.attribute);
                    continue;
                }
            };
            let Some(next) = variant::rewrite_theme_marker(&current, &target.marker_prefix, theme) else {
                continue;
            };
            match self.doc.set_attribute(&target.element_id, &target.attribute, &next) {
                Ok(()) => rewritten += 1,
                Err(e) => log::warn!("writing #{} {} failed: {e}", target.element_id, target.attribute),
            }
        }
        rewritten
    }

    // --- Variant navigation ---

    /// Navigate to the `target` rendering of the current page.
    ///
    /// Returns the URL navigated to, or `Ok(None)` when the current URL does
    /// not name the other rendering.
    pub fn navigate_to_variant(&mut self, target: DocumentVariant) -> Result<Option<String>, ThemeError> {
        let Some(current) = self.doc.location()? else {
            return Ok(None);
        };
        let Some(next) = variant::rewrite_url(&current, target, &self.config.variants) else {
            log::debug!("{current} has no variant suffix to swap for {target:?}");
            return Ok(None);
        };
        self.doc.navigate(&next)?;
        Ok(Some(next))
    }

    /// Navigate to whichever rendering the current page is not.
    pub fn toggle_variant(&mut self) -> Result<Option<String>, ThemeError> {
        let Some(current) = self.doc.location()? else {
            return Ok(None);
        };
        let Some(variant) = DocumentVariant::detect(&current, &self.config.variants) else {
            log::debug!("{current} is not a variant page");
            return Ok(None);
        };
        self.navigate_to_variant(variant.opposite())
    }
}
