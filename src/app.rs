//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::components::{
    about::About, contact::Contact, faq::Faq, footer::SiteFooter, header::SiteHeader, hero::Hero,
    projects::Projects, services::Services, toasts::{ToastContext, Toasts},
};
use crate::config::SiteConfig;
use crate::seo::SeoMeta;
use crate::state::appearance::ThemeContext;
use crate::state::viewport::ViewportState;

/// Resize events are coalesced over this window.
const RESIZE_DEBOUNCE_MS: u32 = 120;

/// Root application component.
///
/// Provides config, theme, toast and viewport contexts, then renders the
/// single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    provide_context(config.clone());

    let theme = ThemeContext::install(&config);

    ToastContext::install();
    let viewport = RwSignal::new(ViewportState::default());
    provide_context(viewport);
    track_viewport(viewport);

    let shell_class = move || {
        if theme.is_pending() { "site site--pending" } else { "site" }
    };

    view! {
        <SeoMeta/>
        <div class=shell_class>
            <SiteHeader/>
            <main>
                <Hero/>
                <Services/>
                <Projects/>
                <About/>
                <Faq/>
                <Contact/>
            </main>
            <SiteFooter/>
            <Toasts/>
        </div>
    }
}

/// Feed window scroll (every event) and height (debounced) into `viewport`.
fn track_viewport(viewport: RwSignal<ViewportState>) {
    #[cfg(feature = "csr")]
    {
        use crate::util::debounce::Debounce;

        fn measure(viewport: RwSignal<ViewportState>) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or_default()
            };
            let height = size(window.inner_height());
            let scroll_y = window.scroll_y().unwrap_or_default();
            viewport.set(ViewportState { scroll_y, height });
        }

        measure(viewport);

        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            viewport.update(|v| v.scroll_y = scroll_y);
        });

        let debounce = StoredValue::new_local(Debounce::new(RESIZE_DEBOUNCE_MS));
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            debounce.with_value(|d| d.call(move || measure(viewport)));
        });

        on_cleanup(move || {
            scroll.remove();
            resize.remove();
            debounce.try_with_value(Debounce::cancel);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (viewport, RESIZE_DEBOUNCE_MS);
    }
}
