//! `window.localStorage` as a [`PreferenceStore`].
//!
//! Change notifications come from the window's `storage` event, which the
//! browser fires in every other tab of the origin after a write.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Storage, StorageEvent, Window};

use super::js_message;
use crate::error::PrefsError;
use crate::store::{ChangeHandler, PreferenceStore, StorageChange, Subscription};

const STORAGE_EVENT: &str = "storage";

pub struct LocalStorage {
    window: Window,
    storage: Storage,
}

impl LocalStorage {
    /// Open the origin's local storage.
    pub fn open() -> Result<Self, PrefsError> {
        let window = web_sys::window().ok_or(PrefsError::MissingBrowserObject("window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| PrefsError::StorageUnavailable(js_message(&e)))?
            .ok_or_else(|| PrefsError::StorageUnavailable("localStorage is null".into()))?;
        Ok(Self { window, storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.storage
            .get_item(key)
            .map_err(|e| PrefsError::StorageRead { key: key.to_owned(), message: js_message(&e) })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PrefsError::StorageWrite { key: key.to_owned(), message: js_message(&e) })
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        let mut handler = handler;
        let area = self.storage.clone();
        let closure = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
            // sessionStorage writes fire the same event.
            if event.storage_area().as_ref() != Some(&area) {
                return;
            }
            // `clear()` reports a null key.
            let Some(key) = event.key() else {
                return;
            };
            let change = StorageChange { key, old_value: event.old_value(), new_value: event.new_value() };
            handler(&change);
        });

        let target = self.window.clone();
        if let Err(e) = target.add_event_listener_with_callback(STORAGE_EVENT, closure.as_ref().unchecked_ref()) {
            log::warn!("storage listener not registered: {}", js_message(&e));
            return Subscription::inert();
        }

        Subscription::new(move || {
            if let Err(e) = target.remove_event_listener_with_callback(STORAGE_EVENT, closure.as_ref().unchecked_ref())
            {
                log::warn!("storage listener not removed: {}", js_message(&e));
            }
            drop(closure);
        })
    }
}
