//! FAQ accordion.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FAQ_ITEMS;
use crate::state::faq::FaqState;

#[component]
pub fn Faq() -> impl IntoView {
    let state = RwSignal::new(FaqState::default());

    view! {
        <Reveal id="faq" class="faq">
            <h2 class="section__title">"Questions"</h2>
            <div class="faq__list">
                {FAQ_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let open = move || state.with(|s| s.is_open(index));
                        view! {
                            <div class=move || if open() { "faq__item faq__item--open" } else { "faq__item" }>
                                <button
                                    type="button"
                                    class="faq__question"
                                    aria-expanded=move || open().to_string()
                                    on:click=move |_| state.update(|s| s.toggle(index))
                                >
                                    {item.question}
                                </button>
                                <Show when=open>
                                    <p class="faq__answer">{item.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
