//! Frontend Models
//!
//! Data structures matching the backend's JSON.

use serde::{Deserialize, Serialize};

/// A named, ordered collection of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub todo_items: Vec<TodoItem>,
}

/// A single task; `id` is absent until the backend persists it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub todo_list_id: Option<i64>,
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    /// New, unsaved item not yet attached to a list
    pub fn draft(description: impl Into<String>) -> Self {
        Self {
            id: None,
            todo_list_id: None,
            description: description.into(),
            is_complete: false,
        }
    }

    /// Copy with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_complete: !self.is_complete,
            ..self.clone()
        }
    }
}
