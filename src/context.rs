//! Application Context
//!
//! Shared handles provided via the Leptos Context API. The saved-list
//! repository lives here as an explicit object owned by the component
//! tree, not as a module-level singleton.

use leptos::prelude::*;

use crate::models::{SavedList, TaskItem};
use crate::saved::SavedListRepository;

/// App-wide handle to the saved-list repository
#[derive(Clone, Copy)]
pub struct AppContext {
    // LocalStorage arena: the repository holds a web_sys::Storage handle,
    // which is not Send
    repo: StoredValue<SavedListRepository, LocalStorage>,
}

impl AppContext {
    pub fn new(repo: SavedListRepository) -> Self {
        Self {
            repo: StoredValue::new_local(repo),
        }
    }

    /// Snapshot of the repository contents for the store mirror
    pub fn saved_lists(&self) -> Vec<SavedList> {
        self.repo.with_value(|repo| repo.lists().to_vec())
    }

    /// Snapshot the given items under `name`; `None` when rejected
    pub fn save_list(&self, name: &str, items: &[TaskItem]) -> Option<SavedList> {
        self.repo.try_update_value(|repo| repo.save(name, items)).flatten()
    }

    /// Items of a snapshot, leaving the entry in place
    pub fn resume_list(&self, list_id: u64) -> Option<Vec<TaskItem>> {
        self.repo.with_value(|repo| repo.resume(list_id))
    }

    /// Items of a snapshot, removing the entry
    pub fn edit_list(&self, list_id: u64) -> Option<Vec<TaskItem>> {
        self.repo.try_update_value(|repo| repo.edit(list_id)).flatten()
    }

    /// Drop a snapshot
    pub fn delete_list(&self, list_id: u64) {
        self.repo.update_value(|repo| repo.delete(list_id));
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
