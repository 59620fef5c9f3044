//! User Session
//!
//! Local-only identity captured by the welcome screen. Nothing here is
//! sent to the server; the stored name just personalizes the dashboard.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, USER_KEY};

/// Stored user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Session {
    /// Start a session for a display name, stamped with the current time
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// First word of the name, for compact greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Load the stored session, dropping unreadable data
pub fn load_session(store: &dyn KeyValueStore) -> Option<Session> {
    let raw = store.get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persist the session for future visits
pub fn save_session(store: &dyn KeyValueStore, session: &Session) {
    if let Ok(raw) = serde_json::to_string(session) {
        store.set(USER_KEY, &raw);
    }
}

/// Forget the stored session
pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(USER_KEY);
}

/// Time-of-day greeting for a 24h clock hour
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();
        let session = Session::new("  Amira Hassan ");

        save_session(&store, &session);
        let loaded = load_session(&store).unwrap();

        assert_eq!(loaded.name, "Amira Hassan");
        assert!(loaded.created_at.is_some());
    }

    #[test]
    fn test_clear_session() {
        let store = MemoryStore::new();
        save_session(&store, &Session::new("Amira"));

        clear_session(&store);

        assert!(load_session(&store).is_none());
    }

    #[test]
    fn test_load_tolerates_junk() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json");

        assert!(load_session(&store).is_none());
    }

    #[test]
    fn test_first_name() {
        assert_eq!(Session::new("Amira Hassan").first_name(), "Amira");
        assert_eq!(Session::new("Amira").first_name(), "Amira");
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(6), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(2), "Good evening");
    }
}
