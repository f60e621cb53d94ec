//! Service layer: the seam between the HTTP layer and the repository.
//!
//! Pure delegation today. Success and failure contracts are forwarded from
//! the repository verbatim; any future business logic (deadlines, per-user
//! lists, ...) belongs here, not in the repository or the HTTP layer.

use crate::api::{TodoId, TodoItem};
use crate::db::repository::{RepositoryResult, TodoRepository};

/// List all todo items.
pub async fn list_todos(repo: &dyn TodoRepository) -> RepositoryResult<Vec<TodoItem>> {
    repo.list_todos().await
}

/// Fetch a single todo item; `None` when no row matches.
pub async fn get_todo(repo: &dyn TodoRepository, id: TodoId) -> RepositoryResult<Option<TodoItem>> {
    repo.get_todo(id).await
}

/// Create a todo item; the store assigns the id.
pub async fn create_todo(repo: &dyn TodoRepository, item: &TodoItem) -> RepositoryResult<TodoItem> {
    repo.create_todo(item).await
}

/// Update a todo item; `false` when no row matched the id.
pub async fn update_todo(repo: &dyn TodoRepository, item: &TodoItem) -> RepositoryResult<bool> {
    repo.update_todo(item).await
}

/// Delete a todo item; `false` when no row matched.
pub async fn delete_todo(repo: &dyn TodoRepository, id: TodoId) -> RepositoryResult<bool> {
    repo.delete_todo(id).await
}

/// Clear the table. Test/reset paths only.
pub async fn delete_all_todos(repo: &dyn TodoRepository) -> RepositoryResult<()> {
    repo.delete_all_todos().await
}

/// Probe the backend.
pub async fn health_check(repo: &dyn TodoRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
