//! Theme context shared from the app root.
//!
//! DESIGN
//! ======
//! The controller is `!Send`, so it is parked in a local `StoredValue` owned
//! by the root component. Components get a `Copy` [`ThemeContext`] holding
//! that slot plus an `RwSignal` mirror of the snapshot, which is what drives
//! re-rendering. The controller's sink writes the DOM root and the signal in
//! the same call, so the page never shows half a theme change.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use appearance::{AppearanceController, AppearanceState, PreferenceStore, Theme};
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::browser_theme::{self, BrowserMonitor, BrowserStorage};

pub type SiteAppearance = AppearanceController<BrowserStorage>;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<AppearanceState>,
    controller: StoredValue<SiteAppearance, LocalStorage>,
}

impl ThemeContext {
    /// Build the controller for this page and provide the context.
    ///
    /// Call once, from the root component.
    pub fn install(config: &SiteConfig) -> Self {
        let state = RwSignal::new(AppearanceState::unresolved());
        let store = PreferenceStore::with_key(BrowserStorage, config.theme_storage_key.clone());
        let controller = AppearanceController::new(store, &BrowserMonitor::new(), move |next: AppearanceState| {
            browser_theme::apply_to_document(next);
            state.set(next);
        });
        schedule_settle(&controller, config.theme_grace_ms);

        let ctx = Self { state, controller: StoredValue::new_local(controller) };
        provide_context(ctx);
        ctx
    }

    /// Reactive snapshot.
    pub fn state(self) -> AppearanceState {
        self.state.get()
    }

    pub fn is_dark(self) -> bool {
        self.state.with(|s| s.is_dark)
    }

    pub fn is_pending(self) -> bool {
        self.state.with(|s| s.is_pending)
    }

    pub fn theme(self) -> Theme {
        self.state.with(|s| s.theme())
    }

    pub fn toggle(self) {
        self.controller.with_value(SiteAppearance::toggle);
    }

    pub fn set_explicit(self, is_dark: bool) {
        self.controller.with_value(|c| c.set_explicit(is_dark));
    }
}

/// Clear the pending flag after `grace_ms`; immediately when zero or outside
/// the browser.
fn schedule_settle(controller: &SiteAppearance, grace_ms: u32) {
    #[cfg(feature = "csr")]
    {
        if grace_ms > 0 {
            let handle = controller.settle_handle();
            let timeout = gloo_timers::callback::Timeout::new(grace_ms, move || {
                handle.settle();
            });
            // Owned by the root; disposing it cancels a timer that has not fired.
            let _timer = StoredValue::new_local(timeout);
            return;
        }
    }
    let _ = grace_ms;
    controller.settle();
}
