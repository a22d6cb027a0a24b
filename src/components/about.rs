use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{ABOUT, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Reveal id="about" class="about">
            <h2 class="section__title">"About the studio"</h2>
            <p class="about__copy">{ABOUT}</p>
            <dl class="about__stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="about__stat">
                                <dt>{stat.value}</dt>
                                <dd>{stat.label}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </Reveal>
    }
}
