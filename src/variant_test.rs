use super::*;

fn suffixes() -> VariantSuffixes {
    VariantSuffixes::default()
}

// =============================================================
// Variant suffixes
// =============================================================

#[test]
fn rewrite_url_xml_to_xmq() {
    let url = "https://libxmq.org/examples/config_xml.html";
    assert_eq!(
        rewrite_url(url, DocumentVariant::Xmq, &suffixes()).as_deref(),
        Some("https://libxmq.org/examples/config_xmq.html")
    );
}

#[test]
fn rewrite_url_round_trip_restores_original() {
    let url = "https://libxmq.org/examples/config_xmq.html#top";
    let xml = rewrite_url(url, DocumentVariant::Xml, &suffixes()).unwrap();
    assert_eq!(xml, "https://libxmq.org/examples/config_xml.html#top");
    let back = rewrite_url(&xml, DocumentVariant::Xmq, &suffixes()).unwrap();
    assert_eq!(back, url);
}

#[test]
fn rewrite_url_already_at_target_is_none() {
    assert_eq!(rewrite_url("/a_xmq.html", DocumentVariant::Xmq, &suffixes()), None);
}

#[test]
fn rewrite_url_without_suffix_is_none() {
    assert_eq!(rewrite_url("/index.html", DocumentVariant::Xml, &suffixes()), None);
}

#[test]
fn rewrite_url_replaces_only_first_occurrence() {
    assert_eq!(
        rewrite_url("/a_xml.html/b_xml.html", DocumentVariant::Xmq, &suffixes()).as_deref(),
        Some("/a_xmq.html/b_xml.html")
    );
}

#[test]
fn detect_finds_variant() {
    assert_eq!(DocumentVariant::detect("/x/page_xml.html", &suffixes()), Some(DocumentVariant::Xml));
    assert_eq!(DocumentVariant::detect("/x/page_xmq.html?q=1", &suffixes()), Some(DocumentVariant::Xmq));
    assert_eq!(DocumentVariant::detect("/x/page.html", &suffixes()), None);
}

#[test]
fn detect_prefers_last_occurrence() {
    assert_eq!(
        DocumentVariant::detect("/dir_xml.html/page_xmq.html", &suffixes()),
        Some(DocumentVariant::Xmq)
    );
}

#[test]
fn opposite_swaps() {
    assert_eq!(DocumentVariant::Xml.opposite(), DocumentVariant::Xmq);
    assert_eq!(DocumentVariant::Xmq.opposite(), DocumentVariant::Xml);
}

// =============================================================
// Theme markers
// =============================================================

#[test]
fn rewrite_theme_marker_dark_to_light() {
    assert_eq!(
        rewrite_theme_marker("/convert?dark", "?", Theme::Light).as_deref(),
        Some("/convert?light")
    );
}

#[test]
fn rewrite_theme_marker_light_to_dark() {
    assert_eq!(
        rewrite_theme_marker("/convert?light&x=1", "?", Theme::Dark).as_deref(),
        Some("/convert?dark&x=1")
    );
}

#[test]
fn rewrite_theme_marker_already_current_is_none() {
    assert_eq!(rewrite_theme_marker("/convert?dark", "?", Theme::Dark), None);
}

#[test]
fn rewrite_theme_marker_custom_prefix() {
    assert_eq!(
        rewrite_theme_marker("/render/dark/page", "/render/", Theme::Light).as_deref(),
        Some("/render/light/page")
    );
}
