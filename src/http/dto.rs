//! Data Transfer Objects for the HTTP API.
//!
//! Deserializing into these types is the shape validation: a payload with a
//! missing or mistyped field never constructs a request value, and the
//! handlers map that rejection to a 400. Responses reuse
//! [`crate::api::TodoItem`] directly.

use serde::{Deserialize, Serialize};

/// Request body for creating a new todo item.
///
/// No id field: the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    /// Free-text description, must be non-empty
    pub description: String,
    /// Completion flag
    pub done: bool,
}

/// Request body for updating an existing todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// Id of the row to update
    pub id: i64,
    /// Replacement description, must be non-empty
    pub description: String,
    /// Replacement completion flag
    pub done: bool,
}
