//! Browser capabilities behind the appearance controller.
//!
//! `localStorage` backs [`BrowserStorage`], `matchMedia` backs
//! [`BrowserMonitor`] and [`apply_to_document`] is the render-layer sink.
//! Outside a `csr` build every capability degrades: storage reports
//! unavailable, the monitor reports light and never fires, and the sink is a
//! no-op.

#[cfg(test)]
#[path = "browser_theme_test.rs"]
mod browser_theme_test;

use appearance::{AppearanceError, AppearanceState, KeyValueStorage, Subscription, SystemPreferenceMonitor};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage` as a [`KeyValueStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, AppearanceError> {
    let window = web_sys::window().ok_or(AppearanceError::StorageUnavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(AppearanceError::StorageUnavailable),
        // Access itself throws when storage is blocked by privacy settings.
        Err(e) => Err(AppearanceError::ReadFailed(format!("{e:?}"))),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppearanceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| AppearanceError::ReadFailed(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(AppearanceError::StorageUnavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppearanceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| AppearanceError::WriteRejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(AppearanceError::StorageUnavailable)
        }
    }
}

/// `prefers-color-scheme: dark` media query as a [`SystemPreferenceMonitor`].
#[derive(Debug, Clone, Default)]
pub struct BrowserMonitor {
    #[cfg(feature = "csr")]
    query: Option<web_sys::MediaQueryList>,
}

impl BrowserMonitor {
    pub fn new() -> Self {
        #[cfg(feature = "csr")]
        {
            let query = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten());
            if query.is_none() {
                log::warn!("matchMedia unavailable; theme falls back to light");
            }
            Self { query }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self {}
        }
    }
}

impl SystemPreferenceMonitor for BrowserMonitor {
    fn current(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.query.as_ref().is_some_and(|q| q.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(query) = self.query.clone() else {
                return Subscription::inert();
            };
            let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| handler(ev.matches()),
            );
            if let Err(e) = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                log::warn!("color-scheme listener not attached: {e:?}");
                return Subscription::inert();
            }
            Subscription::new(move || {
                let _ = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
                drop(listener);
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(handler);
            Subscription::inert()
        }
    }
}

/// Reflect `state` onto `<html>`: `data-theme`, the `dark` class and
/// `data-theme-pending`, all in one synchronous pass.
pub fn apply_to_document(state: AppearanceState) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("data-theme", state.theme().as_str());
        let _ = root.class_list().toggle_with_force("dark", state.is_dark);
        if state.is_pending {
            let _ = root.set_attribute("data-theme-pending", "");
        } else {
            let _ = root.remove_attribute("data-theme-pending");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = state;
    }
}
