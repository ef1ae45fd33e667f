//! The document surface the controller writes to.
//!
//! DESIGN
//! ======
//! [`ThemeDocument`] covers the handful of DOM operations the toggle needs so
//! the controller can run against the browser ([`crate::browser`]) or against
//! [`MemoryDocument`] in native tests. Missing elements are reported through
//! `Ok(false)` / `Ok(0)` / `Ok(None)`, never as errors.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RootElement;
use crate::error::ThemeError;

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

pub trait ThemeDocument {
    /// Current `document.cookie` string.
    fn cookie(&self) -> Result<String, ThemeError>;

    /// Assign one cookie, attributes included.
    fn set_cookie(&mut self, assignment: &str) -> Result<(), ThemeError>;

    /// Whether the root element carries `class`. `Ok(false)` when the root
    /// element does not exist.
    fn has_root_class(&self, root: RootElement, class: &str) -> Result<bool, ThemeError>;

    /// Remove `remove` and add `add` on the root element. `Ok(false)` when
    /// the root element does not exist.
    fn swap_root_class(&mut self, root: RootElement, remove: &str, add: &str) -> Result<bool, ThemeError>;

    /// Remove `remove` and add `add` on every element tagged with `marker`.
    /// Returns the number of elements touched.
    fn swap_marked_classes(&mut self, marker: &str, remove: &str, add: &str) -> Result<usize, ThemeError>;

    /// Attribute of the element with `id`; `Ok(None)` if either is missing.
    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, ThemeError>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Current page URL.
    fn location(&self) -> Result<Option<String>, ThemeError>;

    /// Full navigation to `url`.
    fn navigate(&mut self, url: &str) -> Result<(), ThemeError>;
}

/// Run `swap` on every element, logging and skipping the ones that fail.
///
/// Returns the number of elements swapped successfully.
pub fn swap_each<T>(elements: impl IntoIterator<Item = T>, mut swap: impl FnMut(T) -> Result<(), ThemeError>) -> usize {
    let mut touched = 0;
    for (index, el) in elements.into_iter().enumerate() {
        match swap(el) {
            Ok(()) => touched += 1,
            Err(e) => log::warn!("themed block {index} skipped: {e}"),
        }
    }
    touched
}

/// An element in [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        Self { classes: classes.iter().map(|c| (*c).to_owned()).collect(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    fn swap_class(&mut self, remove: &str, add: &str) {
        self.classes.remove(remove);
        self.classes.insert(add.to_owned());
    }
}

/// In-memory document with a browser-like cookie jar.
///
/// Cookie assignments keep only the `name=value` part, and reading the jar
/// yields pairs joined by `"; "` in first-set order, like `document.cookie`.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    pub html: Option<MemoryElement>,
    pub body: Option<MemoryElement>,
    pub elements: Vec<MemoryElement>,
    pub location: Option<String>,
    pub navigations: Vec<String>,
    cookies: Vec<(String, String)>,
    cookie_writes: usize,
}

impl MemoryDocument {
    /// A document with empty `<html>` and `<body>` and nothing else.
    #[must_use]
    pub fn new() -> Self {
        Self { html: Some(MemoryElement::default()), body: Some(MemoryElement::default()), ..Self::default() }
    }

    #[must_use]
    pub fn with_element(mut self, element: MemoryElement) -> Self {
        self.elements.push(element);
        self
    }

    #[must_use]
    pub fn with_location(mut self, url: &str) -> Self {
        self.location = Some(url.to_owned());
        self
    }

    /// Seed the jar from a raw `document.cookie` style string.
    #[must_use]
    pub fn with_cookies(mut self, raw: &str) -> Self {
        for (name, value) in crate::cookie::pairs(raw) {
            self.store_cookie(name, value);
        }
        self
    }

    #[must_use]
    pub fn root(&self, root: RootElement) -> Option<&MemoryElement> {
        match root {
            RootElement::Body => self.body.as_ref(),
            RootElement::Html => self.html.as_ref(),
        }
    }

    /// Elements carrying `class`.
    pub fn elements_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a MemoryElement> {
        self.elements.iter().filter(move |el| el.classes.contains(class))
    }

    /// Number of cookie assignments made through [`ThemeDocument::set_cookie`].
    #[must_use]
    pub fn cookie_writes(&self) -> usize {
        self.cookie_writes
    }

    fn root_mut(&mut self, root: RootElement) -> Option<&mut MemoryElement> {
        match root {
            RootElement::Body => self.body.as_mut(),
            RootElement::Html => self.html.as_mut(),
        }
    }

    fn element_by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    fn store_cookie(&mut self, name: &str, value: &str) {
        match self.cookies.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.cookies.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl ThemeDocument for MemoryDocument {
    fn cookie(&self) -> Result<String, ThemeError> {
        let pairs: Vec<String> = self.cookies.iter().map(|(k, v)| format!("{k}={v}")).collect();
        Ok(pairs.join("; "))
    }

    fn set_cookie(&mut self, assignment: &str) -> Result<(), ThemeError> {
        let first = assignment.split(';').next().unwrap_or_default();
        let Some((name, value)) = first.split_once('=') else {
            return Err(ThemeError::Dom(format!("malformed cookie assignment: {assignment}")));
        };
        self.store_cookie(name.trim(), value.trim());
        self.cookie_writes += 1;
        Ok(())
    }

    fn has_root_class(&self, root: RootElement, class: &str) -> Result<bool, ThemeError> {
        Ok(self.root(root).is_some_and(|el| el.classes.contains(class)))
    }

    fn swap_root_class(&mut self, root: RootElement, remove: &str, add: &str) -> Result<bool, ThemeError> {
        let Some(el) = self.root_mut(root) else {
            return Ok(false);
        };
        el.swap_class(remove, add);
        Ok(true)
    }

    fn swap_marked_classes(&mut self, marker: &str, remove: &str, add: &str) -> Result<usize, ThemeError> {
        let marked = self.elements.iter_mut().filter(|el| el.classes.contains(marker));
        Ok(swap_each(marked, |el| {
            el.swap_class(remove, add);
            Ok(())
        }))
    }

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.element_by_id(id).and_then(|el| el.attributes.get(name).cloned()))
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        let Some(el) = self.elements.iter_mut().find(|el| el.id.as_deref() == Some(id)) else {
            return Err(ThemeError::Dom(format!("no element with id {id}")));
        };
        el.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn location(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.location.clone())
    }

    fn navigate(&mut self, url: &str) -> Result<(), ThemeError> {
        self.location = Some(url.to_owned());
        self.navigations.push(url.to_owned());
        Ok(())
    }
}
