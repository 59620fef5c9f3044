//! Global Application State
//!
//! Reactive state shared across screens using Leptos signals.

use leptos::*;

use crate::api::types::List;
use crate::state::session::{load_session, Session};
use crate::storage::LocalStore;

/// Top-level screen being displayed
///
/// There is no router; navigation is this one in-memory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Dashboard,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active top-level screen
    pub screen: RwSignal<Screen>,
    /// Local user session, if one was created
    pub session: RwSignal<Option<Session>>,
    /// Lists available on the server
    pub lists: RwSignal<Vec<List>>,
    /// Currently selected list id
    pub selected_list: RwSignal<Option<u64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let session = load_session(&LocalStore);
    let screen = if session.is_some() {
        Screen::Dashboard
    } else {
        Screen::Welcome
    };

    let state = GlobalState {
        screen: create_rw_signal(screen),
        session: create_rw_signal(session),
        lists: create_rw_signal(Vec::new()),
        selected_list: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Find a list by id
fn find_list(lists: &[List], id: Option<u64>) -> Option<&List> {
    let id = id?;
    lists.iter().find(|list| list.id == id)
}

/// Insert or replace a list by id
fn upsert(lists: &mut Vec<List>, list: List) {
    match lists.iter_mut().find(|existing| existing.id == list.id) {
        Some(existing) => *existing = list,
        None => lists.push(list),
    }
}

impl GlobalState {
    /// Get the currently selected list
    pub fn selected(&self) -> Option<List> {
        let lists = self.lists.get();
        find_list(&lists, self.selected_list.get()).cloned()
    }

    /// Make a list the active one
    pub fn select_list(&self, id: u64) {
        self.selected_list.set(Some(id));
    }

    /// Merge a created or updated list into the cache
    pub fn upsert_list(&self, list: List) {
        self.lists.update(|lists| upsert(lists, list));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: u64, name: &str) -> List {
        List {
            id,
            name: name.to_string(),
            message_template: "Hi {name}".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_find_list() {
        let lists = vec![list(1, "Cafes"), list(2, "Bakeries")];

        assert_eq!(find_list(&lists, Some(2)).map(|l| l.id), Some(2));
        assert!(find_list(&lists, Some(9)).is_none());
        assert!(find_list(&lists, None).is_none());
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut lists = vec![list(1, "Cafes")];
        let mut updated = list(1, "Cafes");
        updated.message_template = "Hello {name}".to_string();

        upsert(&mut lists, updated);

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].message_template, "Hello {name}");
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut lists = vec![list(1, "Cafes")];

        upsert(&mut lists, list(2, "Bakeries"));

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1].name, "Bakeries");
    }
}
