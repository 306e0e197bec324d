//! Data Models
//!
//! Plain structs shared by the state model and the storage blob.
//! Field order matches the persisted JSON shape.

use serde::{Deserialize, Serialize};

/// A single entry in the working to-do list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// A named snapshot of a working list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedList {
    pub id: u64,
    pub name: String,
    pub items: Vec<TaskItem>,
}
