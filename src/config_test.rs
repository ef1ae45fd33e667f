use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_pages() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.cookie.name, "background");
    assert_eq!(cfg.cookie.expires, DEFAULT_COOKIE_EXPIRES);
    assert_eq!(cfg.cookie.path, "/");
    assert_eq!(cfg.cookie.same_site, SameSite::Lax);
    assert_eq!(cfg.root, RootElement::Body);
    assert_eq!(cfg.marker_class, "xmq");
    assert_eq!(cfg.modifier_prefix, "xmq_");
    assert_eq!(cfg.nav_targets, vec![NavTarget::upload_form()]);
    assert_eq!(cfg.variants.xml, "_xml.html");
    assert_eq!(cfg.variants.xmq, "_xmq.html");
    assert!(!cfg.inject_styles);
}

#[test]
fn default_passes_validation() {
    assert!(ThemeConfig::default().validate().is_ok());
}

#[test]
fn root_selectors() {
    assert_eq!(RootElement::Body.selector(), "body");
    assert_eq!(RootElement::Html.selector(), "html");
}

// =============================================================
// JSON parsing
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let cfg = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ThemeConfig::default());
}

#[test]
fn from_json_overrides_subset() {
    let cfg = ThemeConfig::from_json(
        r#"{"root":"html","cookie":{"same_site":"strict"},"nav_targets":[],"inject_styles":true}"#,
    )
    .unwrap();
    assert_eq!(cfg.root, RootElement::Html);
    assert_eq!(cfg.cookie.same_site, SameSite::Strict);
    assert_eq!(cfg.cookie.name, "background");
    assert!(cfg.nav_targets.is_empty());
    assert!(cfg.inject_styles);
}

#[test]
fn from_json_nav_target_defaults_marker_prefix() {
    let cfg = ThemeConfig::from_json(r#"{"nav_targets":[{"element_id":"src","attribute":"href"}]}"#).unwrap();
    assert_eq!(cfg.nav_targets[0].marker_prefix, "?");
    assert_eq!(cfg.nav_targets[0].attribute, "href");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn from_json_rejects_empty_cookie_name() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"name":""}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.name", .. }));
}

#[test]
fn from_json_rejects_cookie_name_with_equals() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"name":"a=b"}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.name", .. }));
}

#[test]
fn from_json_rejects_marker_with_whitespace() {
    let err = ThemeConfig::from_json(r#"{"marker_class":"xmq block"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "marker_class", .. }));
}

#[test]
fn from_json_rejects_identical_suffixes() {
    let err = ThemeConfig::from_json(r#"{"variants":{"xml":".html","xmq":".html"}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "variants", .. }));
}

#[test]
fn from_json_rejects_empty_nav_target_id() {
    let err = ThemeConfig::from_json(r#"{"nav_targets":[{"element_id":"","attribute":"action"}]}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "nav_targets.element_id", .. }));
}

#[test]
fn from_json_same_site_is_lowercase() {
    let cfg = ThemeConfig::from_json(r#"{"cookie":{"same_site":"none"}}"#).unwrap();
    assert_eq!(cfg.cookie.same_site, SameSite::None);
    assert!(ThemeConfig::from_json(r#"{"cookie":{"same_site":"Lax"}}"#).is_err());
}

#[test]
fn from_json_rejects_semicolon_in_cookie_path() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"path":"/;domain=evil.example"}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.path", .. }));
}

#[test]
fn from_json_rejects_relative_cookie_path() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"path":"docs"}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.path", .. }));
}

#[test]
fn from_json_rejects_semicolon_in_cookie_expires() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"expires":"x;Secure"}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.expires", .. }));
}

#[test]
fn from_json_rejects_empty_cookie_expires() {
    let err = ThemeConfig::from_json(r#"{"cookie":{"expires":""}}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig { field: "cookie.expires", .. }));
}

#[test]
fn from_json_accepts_http_date_expiry() {
    let cfg = ThemeConfig::from_json(r#"{"cookie":{"expires":"Thu, 01 Jan 2099 00:00:00 GMT"}}"#).unwrap();
    assert_eq!(cfg.cookie.expires, "Thu, 01 Jan 2099 00:00:00 GMT");
}

#[test]
fn same_site_none_requires_secure() {
    assert!(SameSite::None.requires_secure());
    assert!(!SameSite::Lax.requires_secure());
    assert!(!SameSite::Strict.requires_secure());
}
