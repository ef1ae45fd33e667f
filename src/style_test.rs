use super::*;
use crate::config::RootElement;

#[test]
fn palette_matches_renderer_colors() {
    assert_eq!(Palette::for_theme(Theme::Dark).background, "#263338");
    assert_eq!(Palette::for_theme(Theme::Light).background, "#f8f9fb");
}

#[test]
fn stylesheet_has_block_rules_for_both_themes() {
    let css = stylesheet(&ThemeConfig::default());
    assert!(css.contains(
        "pre.xmq_dark{border-radius:2px;background-color:#263338;border:solid 1px #555555;display:inline-block;padding:1em;color:white;}"
    ));
    assert!(css.contains(
        "pre.xmq_light{border-radius:2px;background-color:#f8f9fb;border:solid 1px #888888;display:inline-block;padding:1em;color:black;}"
    ));
}

#[test]
fn stylesheet_root_rules_follow_config() {
    let config = ThemeConfig { root: RootElement::Html, modifier_prefix: "doc_".to_owned(), ..ThemeConfig::default() };
    let css = stylesheet(&config);
    assert!(css.contains("html.dark{background-color:#263338;color:white;}"));
    assert!(css.contains("html.light{background-color:#f8f9fb;color:black;}"));
    assert!(css.contains("pre.doc_dark{"));
    assert!(!css.contains("body."));
}
