//! Section wrapper that fades in once scrolled into view.

use leptos::prelude::*;

use crate::state::viewport::ViewportState;

/// `<section id=...>` that gains `is-visible` the first time its top edge
/// crosses the reveal threshold. Never hides again.
#[component]
pub fn Reveal(#[prop(into)] id: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let node = NodeRef::<leptos::html::Section>::new();
    let revealed = RwSignal::new(cfg!(not(feature = "csr")));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let height = viewport.with(|v| v.height);
        if revealed.get_untracked() {
            return;
        }
        let Some(el) = node.get() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        if crate::util::motion::should_reveal(top, height) {
            revealed.set(true);
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = viewport;

    let base = format!("section reveal {class}");
    let section_class = move || {
        if revealed.get() { format!("{base} is-visible") } else { base.clone() }
    };

    view! {
        <section id=id class=section_class node_ref=node>
            {children()}
        </section>
    }
}
