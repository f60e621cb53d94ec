//! Trait-level tests for both repository backends.
//!
//! `exercise_crud` runs the same contract against the in-memory and the
//! SQLite implementation; the SQLite-only tests cover file lifecycle
//! (fresh mode, reopen, destroy).

use todo_rust::api::{TodoId, TodoItem};
use todo_rust::db::repositories::{LocalRepository, SqliteRepository};
use todo_rust::db::repository::{RepositoryError, TodoRepository};

async fn exercise_crud(repo: &dyn TodoRepository) {
    // Empty store: a value, not an error.
    assert!(repo.list_todos().await.unwrap().is_empty());
    assert!(repo.get_todo(TodoId::new(999)).await.unwrap().is_none());

    // Ids are assigned in insertion order starting at 1.
    let first = repo
        .create_todo(&TodoItem::new("todo 1", false))
        .await
        .unwrap();
    assert_eq!(first.id_value(), Some(1));
    let second = repo
        .create_todo(&TodoItem::new("todo 2", true))
        .await
        .unwrap();
    assert_eq!(second.id_value(), Some(2));

    // Round trip.
    let fetched = repo.get_todo(TodoId::new(1)).await.unwrap().unwrap();
    assert_eq!(fetched, first);

    // Caller-supplied id on create is ignored.
    let third = repo
        .create_todo(&TodoItem {
            id: Some(TodoId::new(42)),
            description: "todo 3".to_string(),
            done: false,
        })
        .await
        .unwrap();
    assert_eq!(third.id_value(), Some(3));

    // Update replaces both fields and keeps the id.
    let modified = repo
        .update_todo(&TodoItem {
            id: Some(TodoId::new(2)),
            description: "changed".to_string(),
            done: false,
        })
        .await
        .unwrap();
    assert!(modified);
    let updated = repo.get_todo(TodoId::new(2)).await.unwrap().unwrap();
    assert_eq!(updated.id_value(), Some(2));
    assert_eq!(updated.description, "changed");
    assert!(!updated.done);

    // Update of a missing row is Ok(false), not an error.
    let missing = repo
        .update_todo(&TodoItem {
            id: Some(TodoId::new(999)),
            description: "nope".to_string(),
            done: true,
        })
        .await
        .unwrap();
    assert!(!missing);

    // Update without an id is a validation error.
    let no_id = repo.update_todo(&TodoItem::new("nope", true)).await;
    assert!(matches!(
        no_id,
        Err(RepositoryError::ValidationError { .. })
    ));

    // Create with an empty description is a validation error and leaves
    // the table untouched.
    let empty = repo.create_todo(&TodoItem::new("", false)).await;
    assert!(matches!(
        empty,
        Err(RepositoryError::ValidationError { .. })
    ));
    assert_eq!(repo.list_todos().await.unwrap().len(), 3);

    // Delete: true once, false after.
    assert!(repo.delete_todo(TodoId::new(1)).await.unwrap());
    assert!(!repo.delete_todo(TodoId::new(1)).await.unwrap());

    // The deleted id is never handed out again.
    let fourth = repo
        .create_todo(&TodoItem::new("todo 4", false))
        .await
        .unwrap();
    assert_eq!(fourth.id_value(), Some(4));

    // Reset path.
    repo.delete_all_todos().await.unwrap();
    assert!(repo.list_todos().await.unwrap().is_empty());

    // Ids keep climbing after a reset.
    let fifth = repo
        .create_todo(&TodoItem::new("todo 5", true))
        .await
        .unwrap();
    assert_eq!(fifth.id_value(), Some(5));

    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_local_repository_crud_contract() {
    let repo = LocalRepository::new();
    exercise_crud(&repo).await;
}

#[tokio::test]
async fn test_sqlite_repository_crud_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");
    let repo = SqliteRepository::open(&path, true).unwrap();
    exercise_crud(&repo).await;
}

#[tokio::test]
async fn test_sqlite_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let repo = SqliteRepository::open(&path, true).unwrap();
    let created = repo
        .create_todo(&TodoItem::new("persistent", true))
        .await
        .unwrap();
    drop(repo);

    let reopened = SqliteRepository::open(&path, false).unwrap();
    let fetched = reopened
        .get_todo(TodoId::new(created.id_value().unwrap()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, created);
    // The done flag survived the 0/1 mapping.
    assert!(fetched.done);
}

#[tokio::test]
async fn test_sqlite_fresh_mode_drops_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let repo = SqliteRepository::open(&path, true).unwrap();
    repo.create_todo(&TodoItem::new("doomed", false))
        .await
        .unwrap();
    drop(repo);

    let fresh = SqliteRepository::open(&path, true).unwrap();
    assert!(fresh.list_todos().await.unwrap().is_empty());
}

#[test]
fn test_sqlite_open_of_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sqlite3");

    let result = SqliteRepository::open(&path, false);
    assert!(matches!(
        result,
        Err(RepositoryError::ConnectionError { .. })
    ));
}

#[tokio::test]
async fn test_sqlite_close_and_destroy_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let repo = SqliteRepository::open(&path, true).unwrap();
    repo.create_todo(&TodoItem::new("short-lived", false))
        .await
        .unwrap();
    assert!(path.exists());

    repo.close_and_destroy().unwrap();
    assert!(!path.exists());
}
