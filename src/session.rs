//! TPO Session
//!
//! The bearer token and display identity of the signed-in officer. Persisted
//! through a `SessionStorage` so the browser build uses `localStorage` and
//! tests use an in-memory map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "token";
const COLLEGE_KEY: &str = "college_id";
const NAME_KEY: &str = "tpo_name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub college_id: String,
    pub name: String,
}

impl Session {
    /// Name shown in the shell, "TPO" when the backend sent none
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { "TPO" } else { &self.name }
    }

    pub fn first_name(&self) -> &str {
        self.display_name().split_whitespace().next().unwrap_or("TPO")
    }

    /// Up to two initials, upper-cased
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Key-value persistence for the session
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("[Session] could not persist {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// Reads and writes the session through a storage backend
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Stored session, if a token is present
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Session {
            token,
            college_id: self.storage.get(COLLEGE_KEY).unwrap_or_default(),
            name: self.storage.get(NAME_KEY).unwrap_or_default(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn college_id(&self) -> Option<String> {
        self.storage.get(COLLEGE_KEY)
    }

    pub fn save(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(COLLEGE_KEY, &session.college_id);
        self.storage.set(NAME_KEY, &session.name);
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(COLLEGE_KEY);
        self.storage.remove(NAME_KEY);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> Session {
        Session {
            token: "jwt-abc".to_string(),
            college_id: "NMAMIT".to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = SessionStore::in_memory();
        assert_eq!(store.load(), None);

        store.save(&session("Asha Rao"));
        assert_eq!(store.load(), Some(session("Asha Rao")));
        assert_eq!(store.token().as_deref(), Some("jwt-abc"));

        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(store.college_id(), None);
    }

    #[test]
    fn test_empty_token_is_no_session() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set("token", "");
        storage.set("tpo_name", "Asha");
        let store = SessionStore::new(storage);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_initials_and_first_name() {
        assert_eq!(session("asha rao kamath").initials(), "AR");
        assert_eq!(session("Asha Rao").first_name(), "Asha");
        assert_eq!(session("").display_name(), "TPO");
        assert_eq!(session("").initials(), "T");
    }
}
