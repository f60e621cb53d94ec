//! In-memory repository for unit testing and local development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::api::{TodoId, TodoItem};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, TodoRepository};

#[derive(Debug, Default)]
struct LocalState {
    todos: BTreeMap<i64, TodoItem>,
    // Monotonic; never reused after deletion, matching the sqlite backend's
    // AUTOINCREMENT behavior.
    next_id: i64,
    broken: bool,
}

/// In-memory implementation of [`TodoRepository`].
///
/// Natural row order is ascending id order. The `set_broken` switch makes
/// every operation fail with a connection error, which lets tests exercise
/// the HTTP layer's 500 path without a real backend outage.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: Mutex<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every subsequent operation to fail (or stop failing).
    pub fn set_broken(&self, broken: bool) {
        self.inner.lock().broken = broken;
    }

    fn check(state: &LocalState, operation: &str) -> RepositoryResult<()> {
        if state.broken {
            return Err(RepositoryError::connection_with_context(
                "repository is broken",
                ErrorContext::new(operation).with_entity("todo"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for LocalRepository {
    async fn list_todos(&self) -> RepositoryResult<Vec<TodoItem>> {
        let state = self.inner.lock();
        Self::check(&state, "list_todos")?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn get_todo(&self, id: TodoId) -> RepositoryResult<Option<TodoItem>> {
        let state = self.inner.lock();
        Self::check(&state, "get_todo")?;
        Ok(state.todos.get(&id.value()).cloned())
    }

    async fn create_todo(&self, item: &TodoItem) -> RepositoryResult<TodoItem> {
        let mut state = self.inner.lock();
        Self::check(&state, "create_todo")?;
        if item.description.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "description must not be empty",
                ErrorContext::new("create_todo").with_entity("todo"),
            ));
        }
        state.next_id += 1;
        let id = state.next_id;
        let created = TodoItem {
            id: Some(TodoId::new(id)),
            description: item.description.clone(),
            done: item.done,
        };
        state.todos.insert(id, created.clone());
        Ok(created)
    }

    async fn update_todo(&self, item: &TodoItem) -> RepositoryResult<bool> {
        let mut state = self.inner.lock();
        Self::check(&state, "update_todo")?;
        let id = item.id.ok_or_else(|| {
            RepositoryError::validation_with_context(
                "todo has no id",
                ErrorContext::new("update_todo").with_entity("todo"),
            )
        })?;
        if !state.todos.contains_key(&id.value()) {
            return Ok(false);
        }
        state.todos.insert(
            id.value(),
            TodoItem {
                id: Some(id),
                description: item.description.clone(),
                done: item.done,
            },
        );
        Ok(true)
    }

    async fn delete_todo(&self, id: TodoId) -> RepositoryResult<bool> {
        let mut state = self.inner.lock();
        Self::check(&state, "delete_todo")?;
        Ok(state.todos.remove(&id.value()).is_some())
    }

    async fn delete_all_todos(&self) -> RepositoryResult<()> {
        let mut state = self.inner.lock();
        Self::check(&state, "delete_all_todos")?;
        state.todos.clear();
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let state = self.inner.lock();
        Self::check(&state, "health_check")?;
        Ok(true)
    }
}
