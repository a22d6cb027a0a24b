//! Page footer.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <footer class="site-footer">
            <span>{config.site_name}</span>
            <a href="#top" class="site-footer__top">"Back to top ↑"</a>
        </footer>
    }
}
