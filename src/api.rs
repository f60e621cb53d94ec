//! Domain types shared by the storage and HTTP layers.
//!
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Todo identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        TodoId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item.
///
/// `id` is `None` until the store has assigned one; an item read back from
/// the store always carries an id. The JSON shape is
/// `{id?: integer, description: string, done: boolean}` with `id` omitted
/// while unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Database ID, assigned on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    /// Free-text description, never empty
    pub description: String,
    /// Completion flag
    pub done: bool,
}

impl TodoItem {
    /// Create a not-yet-persisted item.
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Self {
            id: None,
            description: description.into(),
            done,
        }
    }

    /// The assigned id, once persisted.
    pub fn id_value(&self) -> Option<i64> {
        self.id.map(|id| id.value())
    }
}
