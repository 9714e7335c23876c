//! Bearer-token storage.
//!
//! The token lives under one fixed key in either `localStorage` (durable,
//! survives browser restarts) or `sessionStorage` (ephemeral, cleared at tab
//! close), chosen by the login form's remember-me flag. The two areas are
//! kept mutually exclusive: writing to one clears the other, so there is
//! never a stale second token shadowing the active one.

use crate::utils::constants::TOKEN_STORAGE_KEY;

/// Minimal key-value surface over a browser storage area, abstracted so the
/// persistence semantics are testable off-browser.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Which browser storage area backs a [`BrowserStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// `web_sys::Storage` backend.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn new(area: StorageArea) -> Self {
        BrowserStore { area }
    }

    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Local => window.local_storage().ok().flatten(),
            StorageArea::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl KvStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match self.raw() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("browser storage write failed for {key}");
                }
            }
            None => log::warn!("browser storage unavailable, dropping write for {key}"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The single owner of the bearer token. No other component persists it.
pub struct TokenStore<D: KvStore, E: KvStore> {
    durable: D,
    ephemeral: E,
}

impl<D: KvStore, E: KvStore> TokenStore<D, E> {
    pub fn new(durable: D, ephemeral: E) -> Self {
        TokenStore { durable, ephemeral }
    }

    /// Current token: durable first, then ephemeral. Pure read.
    pub fn get(&self) -> Option<String> {
        self.durable
            .get(TOKEN_STORAGE_KEY)
            .or_else(|| self.ephemeral.get(TOKEN_STORAGE_KEY))
    }

    /// Store a fresh token in the area `remember` selects, clearing the
    /// other area so exactly one copy exists.
    pub fn set(&self, token: &str, remember: bool) {
        if remember {
            self.durable.set(TOKEN_STORAGE_KEY, token);
            self.ephemeral.remove(TOKEN_STORAGE_KEY);
        } else {
            self.ephemeral.set(TOKEN_STORAGE_KEY, token);
            self.durable.remove(TOKEN_STORAGE_KEY);
        }
    }

    /// Remove the token from both areas. Called on logout and whenever the
    /// server declares the session invalid.
    pub fn clear(&self) {
        self.durable.remove(TOKEN_STORAGE_KEY);
        self.ephemeral.remove(TOKEN_STORAGE_KEY);
    }
}

/// The production token store over the browser's storage areas.
pub fn token_store() -> TokenStore<BrowserStore, BrowserStore> {
    TokenStore::new(
        BrowserStore::new(StorageArea::Local),
        BrowserStore::new(StorageArea::Session),
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use super::KvStore;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory stand-in for a browser storage area. Clones share the same
    /// backing map, which lets tests simulate a page reload by building a
    /// fresh `TokenStore` over the same durable area.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulate the browser wiping this area (e.g. tab close for
        /// sessionStorage).
        pub fn wipe(&self) {
            self.entries.borrow_mut().clear();
        }

        pub fn is_empty(&self) -> bool {
            self.entries.borrow().is_empty()
        }
    }

    impl KvStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    fn store() -> (TokenStore<MemoryStore, MemoryStore>, MemoryStore, MemoryStore) {
        let durable = MemoryStore::new();
        let ephemeral = MemoryStore::new();
        (
            TokenStore::new(durable.clone(), ephemeral.clone()),
            durable,
            ephemeral,
        )
    }

    #[test]
    fn test_remembered_token_survives_reload() {
        let (tokens, durable, _ephemeral) = store();
        tokens.set("abc", true);
        assert_eq!(tokens.get().as_deref(), Some("abc"));

        // "Reload": a fresh store over the same durable area, empty
        // ephemeral area.
        let reloaded = TokenStore::new(durable, MemoryStore::new());
        assert_eq!(reloaded.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_ephemeral_token_gone_after_tab_close() {
        let (tokens, durable, ephemeral) = store();
        tokens.set("abc", false);
        assert_eq!(tokens.get().as_deref(), Some("abc"));
        assert!(durable.is_empty());

        ephemeral.wipe();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_clear_removes_both_areas() {
        let (tokens, _durable, _ephemeral) = store();
        tokens.set("abc", true);
        tokens.clear();
        assert_eq!(tokens.get(), None);

        tokens.set("def", false);
        tokens.clear();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_set_keeps_the_areas_mutually_exclusive() {
        let (tokens, durable, ephemeral) = store();
        tokens.set("old", true);
        tokens.set("new", false);
        assert_eq!(tokens.get().as_deref(), Some("new"));
        assert!(durable.is_empty());

        tokens.set("newer", true);
        assert_eq!(tokens.get().as_deref(), Some("newer"));
        assert!(ephemeral.is_empty());
    }

    #[test]
    fn test_get_is_idempotent() {
        let (tokens, _durable, _ephemeral) = store();
        tokens.set("abc", true);
        assert_eq!(tokens.get(), tokens.get());
        assert_eq!(tokens.get().as_deref(), Some("abc"));
    }
}
