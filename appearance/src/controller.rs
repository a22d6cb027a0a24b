//! Appearance controller: the single authority for the resolved theme.
//!
//! DESIGN
//! ======
//! State lives in an `Rc`-shared core so the monitor listener can reach it
//! through a `Weak` without keeping the controller alive. The controller is
//! `!Send`; it belongs to the UI thread and its mutations are serialized by
//! the event loop.
//!
//! Every resolution and mutation ends in exactly one
//! [`AppearanceSink::apply`] call carrying the full snapshot.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::monitor::{Subscription, SystemPreferenceMonitor};
use crate::store::{KeyValueStorage, PreferenceStore};
use crate::theme::{AppearanceState, Theme};

/// Render-layer side effect applied on every resolution and mutation.
pub trait AppearanceSink {
    fn apply(&self, state: AppearanceState);
}

impl<F: Fn(AppearanceState)> AppearanceSink for F {
    fn apply(&self, state: AppearanceState) {
        self(state);
    }
}

/// Where the current `is_dark` value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A preference persisted by an earlier session.
    Stored,
    /// The live OS/browser preference (or the light default).
    System,
    /// A toggle or explicit set during this session.
    Explicit,
}

struct Core<S> {
    state: Cell<AppearanceState>,
    source: Cell<ResolutionSource>,
    explicit: Cell<bool>,
    store: PreferenceStore<S>,
    sink: Box<dyn AppearanceSink>,
}

impl<S: KeyValueStorage> Core<S> {
    fn commit(&self, next: AppearanceState) {
        self.state.set(next);
        self.sink.apply(next);
    }

    fn set_explicit(&self, is_dark: bool) {
        let prev = self.state.get();
        self.explicit.set(true);
        self.source.set(ResolutionSource::Explicit);
        self.store.write(Theme::from_dark(is_dark));
        self.commit(AppearanceState { is_dark, ..prev });
        tracing::debug!(from = prev.is_dark, to = is_dark, "explicit theme set");
    }

    fn on_system_change(&self, is_dark: bool) {
        // Re-read the store at event time: another tab may have persisted a
        // choice since construction.
        if self.explicit.get() || self.store.read().is_some() {
            tracing::debug!(system_dark = is_dark, "system theme change ignored; explicit preference wins");
            return;
        }
        let prev = self.state.get();
        self.source.set(ResolutionSource::System);
        if prev.is_dark == is_dark {
            return;
        }
        self.commit(AppearanceState { is_dark, ..prev });
        tracing::debug!(to = is_dark, "theme followed system preference");
    }

    fn settle(&self) -> bool {
        let prev = self.state.get();
        if !prev.is_pending {
            return false;
        }
        self.commit(AppearanceState { is_pending: false, ..prev });
        tracing::debug!(is_dark = prev.is_dark, "theme settled");
        true
    }
}

/// Owner of the resolved [`AppearanceState`].
///
/// Construct once at the application root and hand references (or a
/// context handle) to consumers.
pub struct AppearanceController<S> {
    core: Rc<Core<S>>,
    _subscription: Subscription,
}

impl<S: KeyValueStorage + 'static> AppearanceController<S> {
    /// Resolve the initial theme and start following the system preference.
    ///
    /// Precedence: stored explicit choice, then `monitor.current()`. The
    /// resolution is applied to `sink` with `is_pending = true` and is never
    /// written back to the store.
    pub fn new(
        store: PreferenceStore<S>,
        monitor: &dyn SystemPreferenceMonitor,
        sink: impl AppearanceSink + 'static,
    ) -> Self {
        let (is_dark, source) = match store.read() {
            Some(theme) => (theme.is_dark(), ResolutionSource::Stored),
            None => (monitor.current(), ResolutionSource::System),
        };
        let initial = AppearanceState { is_dark, is_pending: true };

        let core = Rc::new(Core {
            state: Cell::new(initial),
            source: Cell::new(source),
            explicit: Cell::new(false),
            store,
            sink: Box::new(sink),
        });
        core.sink.apply(initial);
        tracing::info!(is_dark, ?source, "theme resolved");

        let weak: Weak<Core<S>> = Rc::downgrade(&core);
        let subscription = monitor.subscribe(Box::new(move |dark| {
            if let Some(core) = weak.upgrade() {
                core.on_system_change(dark);
            }
        }));

        Self { core, _subscription: subscription }
    }

    /// Read-only snapshot.
    #[must_use]
    pub fn current(&self) -> AppearanceState {
        self.core.state.get()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current().theme()
    }

    #[must_use]
    pub fn source(&self) -> ResolutionSource {
        self.core.source.get()
    }

    /// True once a mutator has run this session or a stored value exists.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.core.explicit.get() || self.core.store.read().is_some()
    }

    /// Flip the theme and persist the result as an explicit choice.
    pub fn toggle(&self) {
        self.core.set_explicit(!self.current().is_dark);
    }

    /// Set the theme absolutely and persist it as an explicit choice.
    pub fn set_explicit(&self, is_dark: bool) {
        self.core.set_explicit(is_dark);
    }

    /// Clear the pending flag. Returns `true` only on the call that did it.
    pub fn settle(&self) -> bool {
        self.core.settle()
    }

    /// Weak handle for settling from a deferred callback.
    #[must_use]
    pub fn settle_handle(&self) -> SettleHandle {
        let weak: Weak<Core<S>> = Rc::downgrade(&self.core);
        SettleHandle {
            settle: Rc::new(move || weak.upgrade().is_some_and(|core| core.settle())),
        }
    }

    /// The persistence layer, for inspection.
    pub fn store(&self) -> &PreferenceStore<S> {
        &self.core.store
    }
}

impl<S> std::fmt::Debug for AppearanceController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceController")
            .field("state", &self.core.state.get())
            .field("source", &self.core.source.get())
            .field("explicit", &self.core.explicit.get())
            .finish_non_exhaustive()
    }
}

/// Deferred settle capability that does not keep the controller alive.
#[derive(Clone)]
pub struct SettleHandle {
    settle: Rc<dyn Fn() -> bool>,
}

impl SettleHandle {
    /// Settle if the controller still exists and is still pending.
    pub fn settle(&self) -> bool {
        (self.settle)()
    }
}

impl std::fmt::Debug for SettleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SettleHandle")
    }
}
