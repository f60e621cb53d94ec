//! Repository trait for todo storage backends.
//!
//! The trait is the seam between the service layer and a concrete storage
//! backend. Two implementations exist: `repositories::sqlite` (durable,
//! production) and `repositories::local` (in-memory, tests and local
//! development).

use async_trait::async_trait;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::api::{TodoId, TodoItem};

/// Repository trait for todo CRUD operations.
///
/// The storage backend is the sole owner of identifier assignment: ids are
/// handed out monotonically on creation and never reused after deletion.
///
/// Every operation distinguishes "succeeded but matched no row" (a value:
/// `None` or `false`) from "could not be attempted" (`RepositoryError`).
/// Callers must not conflate the two.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch all todo items in natural row order.
    ///
    /// An empty table yields an empty vec, never an error.
    async fn list_todos(&self) -> RepositoryResult<Vec<TodoItem>>;

    /// Fetch a single todo item.
    ///
    /// # Returns
    /// * `Ok(Some(item))` - if the row exists
    /// * `Ok(None)` - if no row matches the id
    /// * `Err(RepositoryError)` - on backend failure
    async fn get_todo(&self, id: TodoId) -> RepositoryResult<Option<TodoItem>>;

    /// Insert a new todo item.
    ///
    /// Any caller-supplied id is ignored; the backend assigns one. The
    /// returned item is the input with the assigned id populated. An empty
    /// description fails validation here as well, as a second line of
    /// defence behind the HTTP layer.
    async fn create_todo(&self, item: &TodoItem) -> RepositoryResult<TodoItem>;

    /// Replace description and done for the row matching `item.id`.
    ///
    /// # Returns
    /// * `Ok(true)` - a row was modified
    /// * `Ok(false)` - no row matched the id (the caller renders 404)
    /// * `Err(RepositoryError)` - on backend failure, or when `item.id`
    ///   is `None`
    async fn update_todo(&self, item: &TodoItem) -> RepositoryResult<bool>;

    /// Delete the row matching the id.
    ///
    /// # Returns
    /// * `Ok(true)` - iff exactly one row was removed
    /// * `Ok(false)` - no row matched
    async fn delete_todo(&self, id: TodoId) -> RepositoryResult<bool>;

    /// Clear the table unconditionally. Test/reset paths only.
    async fn delete_all_todos(&self) -> RepositoryResult<()>;

    /// Cheap liveness probe against the backend.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
