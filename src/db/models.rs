//! Raw row types for the todos table.

use crate::api::{TodoId, TodoItem};

/// A row of the `todos` table as stored: `done` is an INTEGER 0/1.
///
/// The 0/1 <-> bool mapping happens exactly once, at this boundary.
#[derive(Debug, Clone)]
pub struct TodoRow {
    pub id: i64,
    pub description: String,
    pub done: i64,
}

impl TodoRow {
    /// Map the raw row to the domain item.
    pub fn into_item(self) -> TodoItem {
        TodoItem {
            id: Some(TodoId::new(self.id)),
            description: self.description,
            done: self.done != 0,
        }
    }
}
