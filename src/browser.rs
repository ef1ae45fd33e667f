//! Browser adapter and JavaScript entry points.
//!
//! [`BrowserDocument`] implements [`ThemeDocument`] over web-sys. The page's
//! controller lives in a thread-local and is created on first use from the
//! optional `<meta name="xmq-theme" content="{...}">` configuration.
//!
//! Exported functions keep the names pages already bind in `onclick`
//! handlers (`goLight()`, `goDark()`, `goXML()`, `goXMQ()`,
//! `checkBackgroundSetting()`).

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, Window};

use crate::components::ThemeToggle;
use crate::config::{RootElement, ThemeConfig};
use crate::controller::ThemeController;
use crate::document::{ThemeDocument, swap_each};
use crate::error::ThemeError;

const CONFIG_META_SELECTOR: &str = "meta[name=\"xmq-theme\"]";
const TOGGLE_HOST_ID: &str = "theme-toggle";
const STYLE_ELEMENT_ID: &str = "xmq-theme-style";

thread_local! {
    static CONTROLLER: RefCell<Option<ThemeController<BrowserDocument>>> = const { RefCell::new(None) };
}

/// The live page behind [`ThemeDocument`].
pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    /// The current window's document, if running in a page.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn html_document(&self) -> Result<&HtmlDocument, ThemeError> {
        self.document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| ThemeError::Dom("document is not an HTML document".to_owned()))
    }

    fn root(&self, root: RootElement) -> Option<Element> {
        match root {
            RootElement::Body => self.document.body().map(Element::from),
            RootElement::Html => self.document.document_element(),
        }
    }
}

impl ThemeDocument for BrowserDocument {
    fn cookie(&self) -> Result<String, ThemeError> {
        Ok(self.html_document()?.cookie()?)
    }

    fn set_cookie(&mut self, assignment: &str) -> Result<(), ThemeError> {
        self.html_document()?.set_cookie(assignment)?;
        Ok(())
    }

    fn has_root_class(&self, root: RootElement, class: &str) -> Result<bool, ThemeError> {
        Ok(self.root(root).is_some_and(|el| el.class_list().contains(class)))
    }

    fn swap_root_class(&mut self, root: RootElement, remove: &str, add: &str) -> Result<bool, ThemeError> {
        let Some(el) = self.root(root) else {
            return Ok(false);
        };
        let classes = el.class_list();
        classes.remove_1(remove)?;
        classes.add_1(add)?;
        Ok(true)
    }

    fn swap_marked_classes(&mut self, marker: &str, remove: &str, add: &str) -> Result<usize, ThemeError> {
        // Live collection; membership depends only on `marker`, which is never touched.
        let elements = self.document.get_elements_by_class_name(marker);
        let marked = (0..elements.length()).filter_map(|i| elements.item(i));
        Ok(swap_each(marked, |el| {
            let classes = el.class_list();
            classes.remove_1(remove)?;
            classes.add_1(add)?;
            Ok(())
        }))
    }

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.document.get_element_by_id(id).and_then(|el| el.get_attribute(name)))
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        let el = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::Dom(format!("no element with id {id}")))?;
        el.set_attribute(name, value)?;
        Ok(())
    }

    fn location(&self) -> Result<Option<String>, ThemeError> {
        Ok(Some(self.window.location().href()?))
    }

    fn navigate(&mut self, url: &str) -> Result<(), ThemeError> {
        self.window.location().set_href(url)?;
        Ok(())
    }
}

/// Page configuration from the `xmq-theme` meta tag, or defaults.
fn load_config(document: &Document) -> ThemeConfig {
    let raw = document
        .query_selector(CONFIG_META_SELECTOR)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    let Some(raw) = raw else {
        return ThemeConfig::default();
    };
    ThemeConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("ignoring xmq-theme config: {e}");
        ThemeConfig::default()
    })
}

/// Run `f` against the page controller, creating it on first use.
///
/// `None` outside a browsing context.
pub(crate) fn with_controller<R>(f: impl FnOnce(&mut ThemeController<BrowserDocument>) -> R) -> Option<R> {
    CONTROLLER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let doc = BrowserDocument::current()?;
            let config = load_config(&doc.document);
            *slot = Some(ThemeController::new(config, doc));
        }
        slot.as_mut().map(f)
    })
}

fn inject_stylesheet(document: &Document, css: &str) -> Result<(), ThemeError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

fn mount_toggle(document: &Document) {
    let Some(host) = document.get_element_by_id(TOGGLE_HOST_ID) else {
        return;
    };
    let Ok(host) = host.dyn_into::<HtmlElement>() else {
        return;
    };
    let show_variant = host.has_attribute("data-variant");
    leptos::mount::mount_to(host, move || view! { <ThemeToggle show_variant=show_variant/> }).forget();
}

/// Module start: logging, panic hook, stored preference, optional styles and
/// toggle control.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let restored = crate::page::restore();
    log::debug!("xmq-theme started, restored={restored:?}");

    let Some(doc) = BrowserDocument::current() else {
        return;
    };
    let css = with_controller(|ctl| ctl.config().inject_styles.then(|| crate::style::stylesheet(ctl.config())));
    if let Some(Some(css)) = css {
        if let Err(e) = inject_stylesheet(&doc.document, &css) {
            log::warn!("stylesheet injection failed: {e}");
        }
    }
    mount_toggle(&doc.document);
}

#[wasm_bindgen(js_name = goLight)]
pub fn go_light() {
    crate::page::go_light();
}

#[wasm_bindgen(js_name = goDark)]
pub fn go_dark() {
    crate::page::go_dark();
}

/// Flip the theme; returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    crate::page::toggle(crate::page::current_theme()).as_str().to_owned()
}

#[wasm_bindgen(js_name = checkBackgroundSetting)]
pub fn check_background_setting() {
    crate::page::restore();
}

#[wasm_bindgen(js_name = goXML)]
pub fn go_xml() {
    crate::page::go_xml();
}

#[wasm_bindgen(js_name = goXMQ)]
pub fn go_xmq() {
    crate::page::go_xmq();
}

/// CSS for the page's current configuration.
#[wasm_bindgen(js_name = themeStylesheet)]
pub fn theme_stylesheet() -> String {
    with_controller(|ctl| crate::style::stylesheet(ctl.config()))
        .unwrap_or_else(|| crate::style::stylesheet(&ThemeConfig::default()))
}
