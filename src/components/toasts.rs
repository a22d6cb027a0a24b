//! Toast stack and the [`ToastContext`] sections use to raise toasts.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Toast queue plus the dismissal timers for the toasts still shown.
///
/// Timers belong to the owner that installed the context, so disposing it
/// clears every timer that has not fired.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub items: RwSignal<ToastState>,
    #[cfg(feature = "csr")]
    timers: StoredValue<Vec<(u64, gloo_timers::callback::Timeout)>, LocalStorage>,
}

impl ToastContext {
    /// Create and provide the context. Call once, from the root component.
    pub fn install() -> Self {
        let ctx = Self {
            items: RwSignal::new(ToastState::default()),
            #[cfg(feature = "csr")]
            timers: StoredValue::new_local(Vec::new()),
        };
        provide_context(ctx);
        ctx
    }

    /// Push a toast and schedule its dismissal after `ttl_ms`.
    pub fn notify(self, kind: ToastKind, message: impl Into<String>, ttl_ms: u32) {
        let mut id = 0;
        let message = message.into();
        self.items.update(|t| id = t.push(kind, message));
        #[cfg(feature = "csr")]
        {
            let items = self.items;
            let timer = gloo_timers::callback::Timeout::new(ttl_ms, move || {
                items.update(|t| {
                    t.dismiss(id);
                });
            });
            // Timers of dismissed or overflowed toasts are dropped here, never
            // from inside their own callback.
            self.timers.update_value(|timers| {
                items.with_untracked(|t| t.retain_live(timers));
                timers.push((id, timer));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, ttl_ms);
        }
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<ToastContext>().items;

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| {
                                    t.dismiss(id);
                                })
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
