//! Contact form section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::toasts::ToastContext;
use crate::config::SiteConfig;
use crate::state::contact::{ContactForm, ContactFormState, SubmitStatus};
use crate::state::toast::ToastKind;

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<ToastContext>();
    let state = RwSignal::new(ContactFormState::default());
    let inline_error = RwSignal::new(None::<String>);
    let endpoint = StoredValue::new(config.form_endpoint.clone());
    let toast_ttl = config.toast_ttl_ms;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut begun = None;
        state.update(|s| begun = Some(s.begin_submit()));
        let payload = match begun {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                inline_error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        inline_error.set(None);

        leptos::task::spawn_local(async move {
            let url = endpoint.get_value();
            let result = crate::net::form_relay::submit_contact(&url, &payload).await;
            state.update(|s| s.finish_submit(&result));
            match result {
                Ok(()) => toasts.notify(ToastKind::Success, "Thanks! We'll reply within two working days.", toast_ttl),
                Err(e) => {
                    log::warn!("contact form not sent: {e}");
                    toasts.notify(ToastKind::Error, format!("Message not sent: {e}"), toast_ttl);
                }
            }
        });
    };

    let field = move |read: fn(&ContactForm) -> String| move || state.with(|s| read(&s.form));
    let submitting = move || state.with(ContactFormState::is_submitting);

    view! {
        <Reveal id="contact" class="contact">
            <h2 class="section__title">"Start a project"</h2>
            <form class="contact-form" on:submit=on_submit novalidate=true>
                <label class="contact-form__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=field(|f| f.name.clone())
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=field(|f| f.email.clone())
                        on:input=move |ev| state.update(|s| s.form.email = event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Budget (optional)"</span>
                    <input
                        type="text"
                        placeholder="e.g. 20-40k"
                        prop:value=field(|f| f.budget.clone())
                        on:input=move |ev| state.update(|s| s.form.budget = event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field contact-form__field--wide">
                    <span>"Tell us about the project"</span>
                    <textarea
                        rows="6"
                        prop:value=field(|f| f.message.clone())
                        on:input=move |ev| state.update(|s| s.form.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || inline_error.get().is_some()>
                    <p class="contact-form__error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || state.with(|s| s.status == SubmitStatus::Sent)>
                    <p class="contact-form__sent">"Message sent."</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </Reveal>
    }
}
