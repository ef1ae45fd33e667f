use super::*;

#[test]
fn as_str_matches_root_class_names() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn opposite_swaps_roles() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_preference_only_dark_prefix_is_dark() {
    assert_eq!(Theme::from_preference("dark"), Theme::Dark);
    assert_eq!(Theme::from_preference("darkest"), Theme::Dark);
    assert_eq!(Theme::from_preference("light"), Theme::Light);
    assert_eq!(Theme::from_preference("DARK"), Theme::Light);
    assert_eq!(Theme::from_preference("solarized"), Theme::Light);
}

#[test]
fn modifier_class_prepends_prefix() {
    assert_eq!(Theme::Light.modifier_class("xmq_"), "xmq_light");
    assert_eq!(Theme::Dark.modifier_class("xmq_"), "xmq_dark");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}
