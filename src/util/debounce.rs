//! Trailing-edge debounce for resize bursts.
//!
//! Every call arms a new generation; an armed callback only runs if no later
//! call or [`Debounce::cancel`] has happened since, so only the last call in
//! a burst runs. In a `csr` build the armed callback fires from a timer;
//! elsewhere it runs immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
use std::cell::Cell;
use std::rc::Rc;

pub struct Debounce {
    delay_ms: u32,
    generation: Rc<Cell<u64>>,
    #[cfg(feature = "csr")]
    pending: RefCell<Option<gloo_timers::callback::Timeout>>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: Rc::new(Cell::new(0)),
            #[cfg(feature = "csr")]
            pending: RefCell::new(None),
        }
    }

    /// Wrap `f` so it runs only while it is still the latest armed call.
    pub fn arm(&self, f: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
        let armed = self.bump();
        let generation = Rc::clone(&self.generation);
        move || {
            if generation.get() == armed {
                f();
            }
        }
    }

    /// Schedule `f`, superseding whatever was scheduled before.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let fire = self.arm(f);
        #[cfg(feature = "csr")]
        {
            let next = gloo_timers::callback::Timeout::new(self.delay_ms, fire);
            *self.pending.borrow_mut() = Some(next);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.delay_ms;
            fire();
        }
    }

    /// Discard any armed call.
    pub fn cancel(&self) {
        self.bump();
        #[cfg(feature = "csr")]
        {
            drop(self.pending.borrow_mut().take());
        }
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}
