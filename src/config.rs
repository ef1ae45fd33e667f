//! Page configuration.
//!
//! Every field has a default matching the stock xmq documentation pages, so
//! a page without configuration behaves like the upload form page: the
//! `background` cookie, the `<body>` root, `xmq` blocks, and an `upload`
//! form whose `action` carries `?light` / `?dark`.
//!
//! Pages may override any subset through JSON (see [`ThemeConfig::from_json`]).

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_COOKIE_NAME: &str = "background";
pub const DEFAULT_COOKIE_EXPIRES: &str = "Fri, 31 Dec 9999 23:59:59 GMT";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_MARKER_CLASS: &str = "xmq";
pub const DEFAULT_MODIFIER_PREFIX: &str = "xmq_";
pub const DEFAULT_XML_SUFFIX: &str = "_xml.html";
pub const DEFAULT_XMQ_SUFFIX: &str = "_xmq.html";

/// `SameSite` attribute written with the preference cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }

    /// Browsers drop `SameSite=None` cookies that are not also `Secure`.
    #[must_use]
    pub fn requires_secure(self) -> bool {
        self == Self::None
    }
}

/// Which element carries the `light` / `dark` root class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootElement {
    #[default]
    Body,
    Html,
}

impl RootElement {
    /// CSS selector for the element.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Html => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    pub name: String,
    pub expires: String,
    pub path: String,
    pub same_site: SameSite,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_owned(),
            expires: DEFAULT_COOKIE_EXPIRES.to_owned(),
            path: DEFAULT_COOKIE_PATH.to_owned(),
            same_site: SameSite::Lax,
        }
    }
}

/// An element attribute holding a URL that embeds the theme, such as a form
/// `action` ending in `?dark`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    pub element_id: String,
    pub attribute: String,
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,
}

impl NavTarget {
    #[must_use]
    pub fn new(element_id: &str, attribute: &str) -> Self {
        Self {
            element_id: element_id.to_owned(),
            attribute: attribute.to_owned(),
            marker_prefix: default_marker_prefix(),
        }
    }

    /// The upload form on xmq's conversion page.
    #[must_use]
    pub fn upload_form() -> Self {
        Self::new("upload", "action")
    }
}

fn default_marker_prefix() -> String {
    "?".to_owned()
}

/// File name suffixes distinguishing the two renderings of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSuffixes {
    pub xml: String,
    pub xmq: String,
}

impl Default for VariantSuffixes {
    fn default() -> Self {
        Self { xml: DEFAULT_XML_SUFFIX.to_owned(), xmq: DEFAULT_XMQ_SUFFIX.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub cookie: CookieConfig,
    pub root: RootElement,
    pub marker_class: String,
    pub modifier_prefix: String,
    pub nav_targets: Vec<NavTarget>,
    pub variants: VariantSuffixes,
    /// Add [`crate::style::stylesheet`] to `<head>` at startup.
    pub inject_styles: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            root: RootElement::Body,
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            modifier_prefix: DEFAULT_MODIFIER_PREFIX.to_owned(),
            nav_targets: vec![NavTarget::upload_form()],
            variants: VariantSuffixes::default(),
            inject_styles: false,
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the toggle write unreadable cookies or
    /// match every element.
    pub fn validate(&self) -> Result<(), ThemeError> {
        require_token("cookie.name", &self.cookie.name)?;
        if self.cookie.name.contains('=') {
            return Err(invalid("cookie.name", "must not contain '='"));
        }
        require_attribute_value("cookie.expires", &self.cookie.expires)?;
        require_attribute_value("cookie.path", &self.cookie.path)?;
        if !self.cookie.path.starts_with('/') {
            return Err(invalid("cookie.path", "must start with '/'"));
        }
        require_token("marker_class", &self.marker_class)?;
        require_token("modifier_prefix", &self.modifier_prefix)?;
        require_nonempty("variants.xml", &self.variants.xml)?;
        require_nonempty("variants.xmq", &self.variants.xmq)?;
        if self.variants.xml == self.variants.xmq {
            return Err(invalid("variants", "xml and xmq suffixes must differ"));
        }
        for target in &self.nav_targets {
            require_nonempty("nav_targets.element_id", &target.element_id)?;
            require_nonempty("nav_targets.attribute", &target.attribute)?;
        }
        Ok(())
    }
}

fn require_nonempty(field: &'static str, value: &str) -> Result<(), ThemeError> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Names that end up in `name=value` pairs or class lists.
fn require_token(field: &'static str, value: &str) -> Result<(), ThemeError> {
    require_nonempty(field, value)?;
    if value.chars().any(|c| c.is_whitespace() || c == ';') {
        return Err(invalid(field, "must not contain whitespace or ';'"));
    }
    Ok(())
}

/// Cookie attribute values; a `;` would start another attribute.
fn require_attribute_value(field: &'static str, value: &str) -> Result<(), ThemeError> {
    require_nonempty(field, value)?;
    if value.chars().any(|c| c == ';' || c.is_control()) {
        return Err(invalid(field, "must not contain ';' or control characters"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> ThemeError {
    ThemeError::InvalidConfig { field, reason: reason.to_owned() }
}
