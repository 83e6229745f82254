//! Preference store abstraction and the in-memory multi-tab store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's origin-scoped key-value storage is the single source of
//! truth for preferences. It is last-write-wins and notifies every OTHER tab
//! of the origin when a value changes. `PreferenceStore` captures that
//! contract (`get` / `set` / `subscribe`) so `PreferenceService` can run
//! against `localStorage` in the browser and against `MemoryStore` in tests.
//!
//! ORDERING
//! ========
//! Change notifications are delivered one at a time. A write made while a
//! notification is being handled is queued and dispatched after the current
//! handler returns, never nested inside it. Writes that leave the value
//! unchanged raise no notification.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::PrefsError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// A value change observed on the shared store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<String>,
    /// `None` when the key was removed.
    pub new_value: Option<String>,
}

/// Callback invoked for each change made by another tab.
pub type ChangeHandler = Box<dyn FnMut(&StorageChange)>;

/// Origin-scoped string key-value storage shared across tabs.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Write `key`. Other tabs are notified if the value changed.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;

    /// Register `handler` for changes made by other tabs.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// disposed or dropped.
    fn subscribe(&self, handler: ChangeHandler) -> Subscription;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        (**self).subscribe(handler)
    }
}

/// Disposer for a registered change handler.
///
/// Dropping the subscription also unregisters the handler; keep it alive for
/// as long as the page should react to other tabs.
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// A subscription with nothing to tear down (store without a change channel).
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    /// Unregister the handler now.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

// =============================================================
// In-memory store
// =============================================================

type TabId = u64;

struct Listener {
    id: u64,
    tab: TabId,
    handler: Rc<RefCell<ChangeHandler>>,
}

#[derive(Default)]
struct Shared {
    values: HashMap<String, String>,
    listeners: Vec<Listener>,
    pending: VecDeque<(TabId, StorageChange)>,
    dispatching: bool,
    next_tab: TabId,
    next_listener: u64,
    write_failure: Option<String>,
}

/// In-memory origin storage. Each handle created by [`MemoryStore::open_tab`]
/// behaves like a separate browser tab on the same origin.
///
/// Cloning a handle yields another handle onto the SAME tab.
#[derive(Clone)]
pub struct MemoryStore {
    shared: Rc<RefCell<Shared>>,
    tab: TabId,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a fresh origin and return its first tab.
    pub fn new() -> Self {
        let shared = Shared { next_tab: 1, ..Shared::default() };
        Self { shared: Rc::new(RefCell::new(shared)), tab: 0 }
    }

    /// Open another tab on the same origin.
    pub fn open_tab(&self) -> Self {
        let tab = {
            let mut shared = self.shared.borrow_mut();
            let tab = shared.next_tab;
            shared.next_tab += 1;
            tab
        };
        Self { shared: Rc::clone(&self.shared), tab }
    }

    /// Remove `key`, notifying other tabs with an absent new value.
    pub fn remove(&self, key: &str) {
        let change = {
            let mut shared = self.shared.borrow_mut();
            let Some(old) = shared.values.remove(key) else {
                return;
            };
            StorageChange { key: key.to_owned(), old_value: Some(old), new_value: None }
        };
        self.broadcast(change);
    }

    /// Make every subsequent write fail with `message` (`None` restores writes).
    pub fn set_write_failure(&self, message: Option<&str>) {
        self.shared.borrow_mut().write_failure = message.map(str::to_owned);
    }

    /// Number of handlers registered across all tabs.
    pub fn listener_count(&self) -> usize {
        self.shared.borrow().listeners.len()
    }

    fn broadcast(&self, change: StorageChange) {
        {
            let mut shared = self.shared.borrow_mut();
            shared.pending.push_back((self.tab, change));
            if shared.dispatching {
                return;
            }
            shared.dispatching = true;
        }

        loop {
            let (change, handlers) = {
                let mut shared = self.shared.borrow_mut();
                let Some((origin, change)) = shared.pending.pop_front() else {
                    shared.dispatching = false;
                    return;
                };
                let handlers: Vec<_> = shared
                    .listeners
                    .iter()
                    .filter(|listener| listener.tab != origin)
                    .map(|listener| Rc::clone(&listener.handler))
                    .collect();
                (change, handlers)
            };

            for handler in handlers {
                match handler.try_borrow_mut() {
                    Ok(mut handler) => (*handler)(&change),
                    Err(_) => log::warn!("storage change for {} skipped: handler busy", change.key),
                }
            }
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.shared.borrow().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let change = {
            let mut shared = self.shared.borrow_mut();
            if let Some(message) = &shared.write_failure {
                return Err(PrefsError::StorageWrite { key: key.to_owned(), message: message.clone() });
            }
            let old_value = shared.values.insert(key.to_owned(), value.to_owned());
            if old_value.as_deref() == Some(value) {
                return Ok(());
            }
            StorageChange { key: key.to_owned(), old_value, new_value: Some(value.to_owned()) }
        };
        self.broadcast(change);
        Ok(())
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        let id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_listener;
            shared.next_listener += 1;
            shared.listeners.push(Listener { id, tab: self.tab, handler: Rc::new(RefCell::new(handler)) });
            id
        };

        let weak: Weak<RefCell<Shared>> = Rc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().listeners.retain(|listener| listener.id != id);
            }
        })
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("MemoryStore")
            .field("tab", &self.tab)
            .field("values", &shared.values)
            .field("listeners", &shared.listeners.len())
            .finish()
    }
}
