//! Persisted theme preference.
//!
//! DESIGN
//! ======
//! [`KeyValueStorage`] is the raw host capability and may fail.
//! [`PreferenceStore`] narrows it to the single `theme` key and absorbs every
//! failure: persistence is an optimization for the next visit, never a
//! requirement for the current one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::AppearanceError;
use crate::theme::Theme;

/// Key under which the explicit preference is stored.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Host string key/value storage (browser `localStorage` or a fake).
pub trait KeyValueStorage {
    /// Read `key`. `Ok(None)` means the key has never been set.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or the read fails.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppearanceError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppearanceError>;
}

/// Single-key theme persistence over a [`KeyValueStorage`].
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    /// Store using [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored explicit preference, or `None` when absent, unparsable or
    /// unreadable.
    pub fn read(&self) -> Option<Theme> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "theme preference unreadable; treating as absent");
                return None;
            }
        };
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            tracing::warn!(key = %self.key, value = %raw, "ignoring unrecognized theme preference");
        }
        theme
    }

    /// Best-effort persist. Failures are logged and dropped.
    pub fn write(&self, theme: Theme) {
        match self.storage.set_item(&self.key, theme.as_str()) {
            Ok(()) => tracing::debug!(key = %self.key, %theme, "theme preference saved"),
            Err(e) => tracing::warn!(key = %self.key, %theme, error = %e, "theme preference not saved"),
        }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// In-memory [`KeyValueStorage`]. Clones share the same map, so a test can
/// keep one handle and give another to the controller.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `key = value`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.inner.borrow_mut().items.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make subsequent reads fail like a disabled `localStorage`.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Make subsequent writes fail like an exhausted quota.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Raw value for `key`, bypassing failure injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn remove(&self, key: &str) {
        self.inner.borrow_mut().items.remove(key);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppearanceError> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(AppearanceError::StorageUnavailable);
        }
        Ok(inner.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppearanceError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(AppearanceError::WriteRejected("quota exceeded".to_owned()));
        }
        inner.items.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }
}
