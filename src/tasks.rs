//! Working List State
//!
//! The current editable to-do list plus the set of item ids marked for
//! bulk deletion. Pure state transitions, no rendering or storage
//! concerns, so everything here is unit-testable off-browser.

use std::collections::HashSet;

use crate::models::TaskItem;

/// The working to-do list and its selection set.
///
/// Item ids come from a monotonic counter seeded with the startup
/// timestamp, bumped past any id seen in loaded data. Invariant: the
/// selection set only ever holds ids present in the working list.
#[derive(Clone, Debug, Default)]
pub struct TaskList {
    items: Vec<TaskItem>,
    selected_ids: HashSet<u64>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::with_seed(1)
    }

    /// Start the id counter at `seed` (the app passes the wall-clock
    /// timestamp so ids stay comparable to ones minted by earlier runs).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            items: Vec::new(),
            selected_ids: HashSet::new(),
            next_id: seed.max(1),
        }
    }

    // ========================
    // Read accessors
    // ========================

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    // ========================
    // Transitions
    // ========================

    /// Append a new undone item. Returns `None` without touching state
    /// when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskItem> {
        if text.trim().is_empty() {
            return None;
        }
        let item = TaskItem {
            id: self.alloc_id(),
            text: text.to_string(),
            done: false,
        };
        self.items.push(item.clone());
        Some(item)
    }

    /// Flip `done` on the matching item; no-op when the id is unknown.
    pub fn toggle_done(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.done = !item.done;
        }
    }

    /// Remove the matching item; no-op when the id is unknown. The id is
    /// also dropped from the selection set.
    pub fn delete(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
        self.selected_ids.remove(&id);
    }

    /// Mark/unmark an item for bulk deletion. Ids not present in the
    /// working list are never inserted.
    pub fn toggle_select(&mut self, id: u64) {
        if self.selected_ids.remove(&id) {
            return;
        }
        if self.items.iter().any(|item| item.id == id) {
            self.selected_ids.insert(id);
        }
    }

    /// Remove every selected item and leave the selection empty.
    pub fn delete_selected(&mut self) {
        let selected = std::mem::take(&mut self.selected_ids);
        self.items.retain(|item| !selected.contains(&item.id));
    }

    /// Empty the working list (a successful save calls this).
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_ids.clear();
    }

    /// Replace the working list wholesale with a resumed/edited snapshot.
    /// Stale selections are pruned and the id counter is bumped past the
    /// loaded ids so later adds stay unique.
    pub fn replace(&mut self, items: Vec<TaskItem>) {
        self.selected_ids
            .retain(|id| items.iter().any(|item| item.id == *id));
        if let Some(max_id) = items.iter().map(|item| item.id).max() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        self.items = items;
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(texts: &[&str]) -> TaskList {
        let mut list = TaskList::with_seed(1);
        for text in texts {
            list.add(text).expect("non-blank text should add");
        }
        list
    }

    #[test]
    fn test_add_appends_undone_item() {
        let mut list = TaskList::new();
        let item = list.add("milk").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(item.text, "milk");
        assert!(!item.done);
        assert_eq!(list.items()[0], item);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TaskList::new();
        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_unique_and_increasing() {
        let mut list = TaskList::with_seed(1000);
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();
        assert!(a.id < b.id && b.id < c.id);
        assert!(a.id >= 1000);
    }

    #[test]
    fn test_toggle_done_twice_restores() {
        let mut list = list_with(&["milk"]);
        let id = list.items()[0].id;
        list.toggle_done(id);
        assert!(list.items()[0].done);
        list.toggle_done(id);
        assert!(!list.items()[0].done);
    }

    #[test]
    fn test_toggle_done_unknown_id_is_noop() {
        let mut list = list_with(&["milk"]);
        list.toggle_done(999);
        assert!(!list.items()[0].done);
    }

    #[test]
    fn test_delete_removes_item() {
        let mut list = list_with(&["milk", "bread"]);
        let id = list.items()[0].id;
        list.delete(id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "bread");

        list.delete(999);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_prunes_selection() {
        let mut list = list_with(&["milk"]);
        let id = list.items()[0].id;
        list.toggle_select(id);
        assert_eq!(list.selected_count(), 1);
        list.delete(id);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_unknown_id_ignored() {
        let mut list = list_with(&["milk"]);
        list.toggle_select(999);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_delete_selected_removes_exactly_selected() {
        let mut list = list_with(&["a", "b", "c"]);
        let ids: Vec<u64> = list.items().iter().map(|item| item.id).collect();
        // select a, select b, deselect a: only b should go
        list.toggle_select(ids[0]);
        list.toggle_select(ids[1]);
        list.toggle_select(ids[0]);
        list.delete_selected();

        let remaining: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_clear_empties_list_and_selection() {
        let mut list = list_with(&["a", "b"]);
        let id = list.items()[0].id;
        list.toggle_select(id);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_replace_prunes_selection_and_reseeds_ids() {
        let mut list = list_with(&["old"]);
        let old_id = list.items()[0].id;
        list.toggle_select(old_id);

        let snapshot = vec![
            TaskItem { id: 50, text: "a".into(), done: true },
            TaskItem { id: 90, text: "b".into(), done: false },
        ];
        list.replace(snapshot.clone());

        assert_eq!(list.items(), snapshot.as_slice());
        assert_eq!(list.selected_count(), 0);
        // the next fresh id must not collide with loaded ids
        let added = list.add("c").unwrap();
        assert!(added.id > 90);
    }

    #[test]
    fn test_milk_bread_scenario() {
        let mut list = TaskList::new();
        let milk = list.add("milk").unwrap();
        list.add("bread").unwrap();
        list.toggle_done(milk.id);

        let view: Vec<(&str, bool)> = list
            .items()
            .iter()
            .map(|item| (item.text.as_str(), item.done))
            .collect();
        assert_eq!(view, vec![("milk", true), ("bread", false)]);
    }
}
