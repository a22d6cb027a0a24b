//! OS/browser color-scheme preference.
//!
//! DESIGN
//! ======
//! A subscription is an owned [`Subscription`] value. Cancelling or dropping
//! it deregisters the listener, so a listener's lifetime is tied to whoever
//! holds the guard rather than to a manual unsubscribe call.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Source of the "prefers dark color scheme" signal.
pub trait SystemPreferenceMonitor {
    /// Preference at call time.
    fn current(&self) -> bool;

    /// Register `handler`, invoked once per change while the returned guard
    /// is alive.
    fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription;
}

/// Guard for a monitor listener. Dropping it deregisters the listener.
#[must_use = "dropping a Subscription deregisters the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Guard that runs `release` exactly once, on cancel or drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Guard for a listener that was never registered.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Deregister now. No handler invocation happens after this returns.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct ManualInner {
    dark: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Monitor driven by explicit [`ManualMonitor::set`] calls. Clones share
/// state.
#[derive(Clone, Default)]
pub struct ManualMonitor {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualMonitor {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let monitor = Self::default();
        monitor.inner.borrow_mut().dark = dark;
        monitor
    }

    /// Change the preference, notifying listeners if the value differs.
    pub fn set(&self, dark: bool) {
        let snapshot: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            if inner.dark == dark {
                return;
            }
            inner.dark = dark;
            inner.listeners.clone()
        };
        for (id, listener) in snapshot {
            // A listener earlier in this pass may have cancelled this one.
            if self.is_registered(id) {
                listener(dark);
            }
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner.borrow().listeners.iter().any(|(lid, _)| *lid == id)
    }
}

impl SystemPreferenceMonitor for ManualMonitor {
    fn current(&self) -> bool {
        self.inner.borrow().dark
    }

    fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(handler)));
            id
        };
        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl std::fmt::Debug for ManualMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualMonitor")
            .field("dark", &inner.dark)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
