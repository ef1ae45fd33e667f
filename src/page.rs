//! Page-level handlers for the toggle controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buttons, links and the [`crate::components::ThemeToggle`] control call
//! these. In the browser (`csr`) they drive the page's single
//! [`crate::controller::ThemeController`]; natively they only compute the
//! resulting value, which keeps components testable without a DOM.
//!
//! Every handler publishes the resulting theme to one shared
//! `RwSignal<ThemeState>`, so controls stay in sync no matter whether a click
//! came from a component or from a plain `onclick="goDark()"` export.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::controller::ThemeState;
use crate::theme::Theme;
use crate::variant::DocumentVariant;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

thread_local! {
    static THEME_SIGNAL: RefCell<Option<RwSignal<ThemeState>>> = const { RefCell::new(None) };
}

/// Make `signal` the one the handlers publish to.
pub fn bind_signal(signal: RwSignal<ThemeState>) {
    THEME_SIGNAL.with(|slot| *slot.borrow_mut() = Some(signal));
}

/// The bound theme signal, created from [`current_theme`] on first use.
pub fn shared_signal() -> RwSignal<ThemeState> {
    THEME_SIGNAL.with(|slot| {
        *slot
            .borrow_mut()
            .get_or_insert_with(|| RwSignal::new(ThemeState { theme: current_theme() }))
    })
}

fn publish(theme: Theme) {
    let signal = THEME_SIGNAL.with(|slot| *slot.borrow());
    if let Some(signal) = signal {
        signal.set(ThemeState { theme });
    }
}

/// Switch the page to the light background.
pub fn go_light() -> Theme {
    apply(Theme::Light)
}

/// Switch the page to the dark background.
pub fn go_dark() -> Theme {
    apply(Theme::Dark)
}

/// Apply `theme` to the page and persist it.
pub fn apply(theme: Theme) -> Theme {
    #[cfg(feature = "csr")]
    {
        crate::browser::with_controller(|ctl| ctl.apply(theme));
    }
    publish(theme);
    theme
}

/// Switch away from `current` and return the new theme.
pub fn toggle(current: Theme) -> Theme {
    apply(current.opposite())
}

/// Re-apply the stored preference. `None` when nothing is stored.
pub fn restore() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let restored =
            crate::browser::with_controller(crate::controller::ThemeController::restore_from_preference).flatten();
        publish(current_theme());
        restored
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Theme last applied on this page.
pub fn current_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        crate::browser::with_controller(|ctl| ctl.state().theme).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Open the XML rendering of this page.
pub fn go_xml() -> Option<String> {
    go_variant(DocumentVariant::Xml)
}

/// Open the XMQ rendering of this page.
pub fn go_xmq() -> Option<String> {
    go_variant(DocumentVariant::Xmq)
}

fn go_variant(target: DocumentVariant) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        match crate::browser::with_controller(|ctl| ctl.navigate_to_variant(target))? {
            Ok(url) => url,
            Err(e) => {
                log::warn!("variant navigation failed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
        None
    }
}

/// Open whichever rendering this page is not.
pub fn toggle_variant() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        match crate::browser::with_controller(crate::controller::ThemeController::toggle_variant)? {
            Ok(url) => url,
            Err(e) => {
                log::warn!("variant navigation failed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
