//! Selected work with category tabs.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::PROJECTS;
use crate::state::projects::{ProjectFilter, visible_projects};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());

    view! {
        <Reveal id="projects" class="projects">
            <h2 class="section__title">"Selected work"</h2>
            <div class="projects__tabs" role="tablist">
                {ProjectFilter::tabs()
                    .into_iter()
                    .map(|tab| {
                        let active = move || filter.get() == tab;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if active() { "projects__tab projects__tab--active" } else { "projects__tab" }
                                aria-selected=move || active().to_string()
                                on:click=move |_| filter.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="projects__grid">
                <For
                    each=move || visible_projects(PROJECTS, filter.get())
                    key=|project| project.slug
                    children=move |project| {
                        view! {
                            <article class="project-card">
                                <span class="project-card__meta">
                                    {project.category.label()} " · " {project.year}
                                </span>
                                <h3>{project.title}</h3>
                                <p class="project-card__client">{project.client}</p>
                                <p>{project.summary}</p>
                            </article>
                        }
                    }
                />
            </div>
        </Reveal>
    }
}
