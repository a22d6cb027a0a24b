//! Services grid.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <Reveal id="services" class="services">
            <h2 class="section__title">"What we do"</h2>
            <div class="services__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                                <ul class="service-card__list">
                                    {service
                                        .deliverables
                                        .iter()
                                        .map(|d| view! { <li>{*d}</li> })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
