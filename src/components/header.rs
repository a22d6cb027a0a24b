//! Sticky header with in-page navigation and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::state::viewport::ViewportState;

const NAV: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#projects", "Work"),
    ("#about", "About"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let menu_open = RwSignal::new(false);

    let header_class = move || {
        let mut class = String::from("site-header");
        if viewport.with(ViewportState::header_compact) {
            class.push_str(" site-header--compact");
        }
        if menu_open.get() {
            class.push_str(" site-header--menu-open");
        }
        class
    };

    view! {
        <header class=header_class>
            <a href="#top" class="site-header__brand">{config.site_name}</a>
            <nav class="site-header__nav">
                {NAV
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href class="site-header__link" on:click=move |_| menu_open.set(false)>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
            <button
                class="btn site-header__menu"
                type="button"
                aria-label="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
        </header>
    }
}
