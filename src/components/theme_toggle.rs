//! Light/dark switch in the header.

use leptos::prelude::*;

use crate::state::appearance::ThemeContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let label = move || {
        if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| theme.toggle()
            title=label
            aria-label=label
            aria-pressed=move || theme.is_dark().to_string()
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
