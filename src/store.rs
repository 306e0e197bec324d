//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{SavedList, TaskItem};
use crate::tasks::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The working to-do list plus its selection set
    pub tasks: TaskList,
    /// Mirror of the saved-list repository, for rendering
    pub saved_lists: Vec<SavedList>,
}

impl AppState {
    pub fn new(id_seed: u64) -> Self {
        Self {
            tasks: TaskList::with_seed(id_seed),
            saved_lists: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new task; returns it when the text was accepted
pub fn store_add_task(store: &AppStore, text: &str) -> Option<TaskItem> {
    store.tasks().write().add(text)
}

/// Flip done on a task by ID
pub fn store_toggle_done(store: &AppStore, id: u64) {
    store.tasks().write().toggle_done(id);
}

/// Remove a task by ID
pub fn store_delete_task(store: &AppStore, id: u64) {
    store.tasks().write().delete(id);
}

/// Mark/unmark a task for bulk deletion
pub fn store_toggle_select(store: &AppStore, id: u64) {
    store.tasks().write().toggle_select(id);
}

/// Remove every selected task
pub fn store_delete_selected(store: &AppStore) {
    store.tasks().write().delete_selected();
}

/// Replace the working list with a resumed/edited snapshot
pub fn store_load_tasks(store: &AppStore, items: Vec<TaskItem>) {
    store.tasks().write().replace(items);
}

/// Refresh the saved-list mirror from the repository
pub fn store_set_saved_lists(store: &AppStore, lists: Vec<SavedList>) {
    store.saved_lists().set(lists);
}
