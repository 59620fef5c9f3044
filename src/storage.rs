//! Key-Value Storage Adapter
//!
//! Persistence seam for user preferences and session data. The UI layer
//! never touches `localStorage` directly; it goes through [`KeyValueStore`]
//! so theme and session logic stay testable on the host with an in-memory
//! implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the dark/light preference ("dark" or "light")
pub const THEME_MODE_KEY: &str = "theme-mode";

/// Storage key for the RTL override ("true" or "false")
pub const THEME_RTL_KEY: &str = "theme-rtl";

/// Storage key for the high contrast override ("true" or "false")
pub const THEME_HIGH_CONTRAST_KEY: &str = "theme-high-contrast";

/// Storage key for the locally-held user session (JSON)
pub const USER_KEY: &str = "user";

/// Storage key overriding the API base URL
pub const API_BASE_KEY: &str = "wabulk_api_base";

/// Common interface over persistent key-value storage
pub trait KeyValueStore {
    /// Read a value, `None` when absent or storage is unavailable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, silently dropped when storage is unavailable
    fn set(&self, key: &str, value: &str);

    /// Remove a single key
    fn remove(&self, key: &str);

    /// Remove every key
    fn clear(&self);
}

/// Shared handle to a store implementation
pub type StoreHandle = Rc<dyn KeyValueStore>;

/// Browser `localStorage` backed store
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }
}

/// In-memory store for host-side tests
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(THEME_MODE_KEY), None);

        store.set(THEME_MODE_KEY, "dark");
        assert_eq!(store.get(THEME_MODE_KEY), Some("dark".to_string()));

        store.set(THEME_MODE_KEY, "light");
        assert_eq!(store.get(THEME_MODE_KEY), Some("light".to_string()));

        store.remove(THEME_MODE_KEY);
        assert_eq!(store.get(THEME_MODE_KEY), None);
    }

    #[test]
    fn test_memory_store_clear_removes_all_keys() {
        let store = MemoryStore::new();
        store.set(THEME_MODE_KEY, "dark");
        store.set(THEME_RTL_KEY, "true");
        store.set(USER_KEY, "{}");

        store.clear();

        assert_eq!(store.get(THEME_MODE_KEY), None);
        assert_eq!(store.get(THEME_RTL_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }
}
