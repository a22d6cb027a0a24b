//! Site-wide light/dark appearance state.
//!
//! This crate owns the one stateful piece of the studio site: resolving the
//! theme from a persisted explicit choice, the OS/browser color-scheme
//! preference, or the light default, and keeping that resolution, the
//! persisted value and the render layer in step.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host capabilities (key/value storage, the color-scheme signal, the render
//! layer) sit behind small traits so the controller runs unchanged in the
//! browser and in tests. The site crate supplies `localStorage` and
//! `matchMedia` adapters; tests use [`MemoryStorage`] and [`ManualMonitor`].

mod controller;
mod error;
mod monitor;
mod store;
mod theme;

pub use controller::{AppearanceController, AppearanceSink, ResolutionSource, SettleHandle};
pub use error::AppearanceError;
pub use monitor::{ManualMonitor, Subscription, SystemPreferenceMonitor};
pub use store::{DEFAULT_STORAGE_KEY, KeyValueStorage, MemoryStorage, PreferenceStore};
pub use theme::{AppearanceState, Theme};
