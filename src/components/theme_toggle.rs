//! Light/dark buttons plus an optional XML/XMQ switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uses the host app's `RwSignal<ThemeState>` context when there is one and
//! binds it to the page handlers; standalone mounts share the page's signal.
//! Either way the handlers publish every change to it.

use leptos::prelude::*;

use crate::controller::ThemeState;
use crate::theme::Theme;

/// Theme switcher for documentation pages.
#[component]
pub fn ThemeToggle(
    /// Also render a button that opens the other rendering of the page.
    #[prop(optional)]
    show_variant: bool,
) -> impl IntoView {
    let state = match use_context::<RwSignal<ThemeState>>() {
        Some(signal) => {
            crate::page::bind_signal(signal);
            signal
        }
        None => crate::page::shared_signal(),
    };

    let is_active = move |theme: Theme| state.get().theme == theme;

    view! {
        <div class="theme-toggle">
            <button
                class="btn theme-toggle__light"
                class:active=move || is_active(Theme::Light)
                on:click=move |_| {
                    crate::page::go_light();
                }
                title="Light background"
            >
                "☀"
            </button>
            <button
                class="btn theme-toggle__dark"
                class:active=move || is_active(Theme::Dark)
                on:click=move |_| {
                    crate::page::go_dark();
                }
                title="Dark background"
            >
                "☾"
            </button>
            <Show when=move || show_variant>
                <button
                    class="btn theme-toggle__variant"
                    on:click=move |_| {
                        let _ = crate::page::toggle_variant();
                    }
                    title="Switch between XML and XMQ"
                >
                    "XML ⇄ XMQ"
                </button>
            </Show>
        </div>
    }
}
