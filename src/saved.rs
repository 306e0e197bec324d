//! Saved List Repository
//!
//! Named snapshots of past working lists. Every mutation writes the full
//! collection through to the storage backend under one key; `hydrate`
//! reads it back once at startup. The repository owns its backend — there
//! is no ambient global binding to storage.

use crate::console;
use crate::models::{SavedList, TaskItem};
use crate::storage::{StorageBackend, SAVED_LISTS_KEY};

pub struct SavedListRepository {
    lists: Vec<SavedList>,
    next_id: u64,
    backend: Box<dyn StorageBackend>,
}

impl SavedListRepository {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_seed(backend, 1)
    }

    /// Start the snapshot id counter at `seed` (the app passes the
    /// wall-clock timestamp). `hydrate` bumps it past stored ids.
    pub fn with_seed(backend: Box<dyn StorageBackend>, seed: u64) -> Self {
        Self {
            lists: Vec::new(),
            next_id: seed.max(1),
            backend,
        }
    }

    pub fn lists(&self) -> &[SavedList] {
        &self.lists
    }

    /// Load the repository from storage. Absent or malformed data starts
    /// an empty repository; neither is an error the UI ever sees.
    pub fn hydrate(&mut self) {
        let Some(raw) = self.backend.read(SAVED_LISTS_KEY) else {
            return;
        };
        match serde_json::from_str::<Vec<SavedList>>(&raw) {
            Ok(lists) => {
                if let Some(max_id) = lists.iter().map(|list| list.id).max() {
                    self.next_id = self.next_id.max(max_id + 1);
                }
                self.lists = lists;
            }
            Err(err) => {
                console::warn(&format!(
                    "[STORAGE] ignoring malformed saved-lists blob: {err}"
                ));
            }
        }
    }

    /// Snapshot `items` under `name`. Returns `None` without touching
    /// state when the name is blank or there is nothing to save; otherwise
    /// the new entry is appended and the repository persisted.
    pub fn save(&mut self, name: &str, items: &[TaskItem]) -> Option<SavedList> {
        if name.trim().is_empty() || items.is_empty() {
            return None;
        }
        let list = SavedList {
            id: self.alloc_id(),
            name: name.to_string(),
            items: items.to_vec(),
        };
        self.lists.push(list.clone());
        self.persist();
        Some(list)
    }

    /// Copy of a snapshot's items; the entry stays and nothing is written.
    pub fn resume(&self, list_id: u64) -> Option<Vec<TaskItem>> {
        self.lists
            .iter()
            .find(|list| list.id == list_id)
            .map(|list| list.items.clone())
    }

    /// Copy of a snapshot's items, removing the entry (load-for-editing).
    pub fn edit(&mut self, list_id: u64) -> Option<Vec<TaskItem>> {
        let index = self.lists.iter().position(|list| list.id == list_id)?;
        let list = self.lists.remove(index);
        self.persist();
        Some(list.items)
    }

    /// Drop a snapshot. Unknown ids are a no-op with no write.
    pub fn delete(&mut self, list_id: u64) {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != list_id);
        if self.lists.len() != before {
            self.persist();
        }
    }

    /// Write the full collection through to storage. A failed write keeps
    /// the in-memory state and logs a warning.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.lists) {
            Ok(payload) => payload,
            Err(err) => {
                console::warn(&format!("[STORAGE] failed to serialize saved lists: {err}"));
                return;
            }
        };
        if let Err(err) = self.backend.write(SAVED_LISTS_KEY, &payload) {
            console::warn(&format!("[STORAGE] failed to persist saved lists: {err}"));
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
