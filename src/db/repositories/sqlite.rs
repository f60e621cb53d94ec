//! SQLite implementation of the todo repository.
//!
//! One table, single-statement DML only: the statement-level atomicity the
//! engine provides is the entire concurrency story, so no operation ever
//! spans a transaction. Statements run on the blocking thread pool because
//! rusqlite is synchronous.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::api::{TodoId, TodoItem};
use crate::db::models::TodoRow;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, TodoRepository};

const SCHEMA_SQL: &str = "CREATE TABLE todos
(
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    done        INTEGER NOT NULL
)";

/// SQLite-backed implementation of [`TodoRepository`].
#[derive(Debug)]
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl SqliteRepository {
    /// Open (and in fresh mode, reset) the database at `path`.
    ///
    /// * `fresh = false`: opens an existing database read-write and fails
    ///   with a connection error when it does not exist.
    /// * `fresh = true`: creates the file if needed, then drops and
    ///   recreates the schema. Destructive; test/dev bootstrap only.
    pub fn open<P: AsRef<Path>>(path: P, fresh: bool) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = if fresh {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };

        let conn = Connection::open_with_flags(&path, flags).map_err(|e| {
            RepositoryError::connection_with_context(
                format!("could not open database {}: {}", path.display(), e),
                ErrorContext::new("open").with_entity("todos"),
            )
        })?;

        if fresh {
            tracing::warn!(path = %path.display(), "initializing fresh database");
            conn.execute_batch("DROP TABLE IF EXISTS todos")
                .and_then(|_| conn.execute_batch(SCHEMA_SQL))
                .map_err(|e| map_sqlite_error(e, "open"))?;
        }

        tracing::info!(path = %path.display(), "database initialized");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Close the connection and remove the database file. Test teardown only.
    pub fn close_and_destroy(self) -> RepositoryResult<()> {
        let conn = Arc::into_inner(self.conn)
            .ok_or_else(|| RepositoryError::internal("connection is still shared"))?
            .into_inner();
        conn.close().map_err(|(_, e)| {
            RepositoryError::connection_with_context(
                format!("could not close database: {}", e),
                ErrorContext::new("close_and_destroy"),
            )
        })?;
        std::fs::remove_file(&self.path).map_err(|e| {
            RepositoryError::internal(format!(
                "could not remove database {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Run a statement on the blocking pool with the connection locked.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await
        .map_err(|e| {
            RepositoryError::internal(format!("blocking task failed: {}", e))
                .with_operation(operation)
        })?
        .map_err(|e| map_sqlite_error(e, operation))
    }
}

fn map_sqlite_error(err: rusqlite::Error, operation: &str) -> RepositoryError {
    let context = ErrorContext::new(operation).with_entity("todo");
    match err {
        rusqlite::Error::SqliteFailure(code, message) => RepositoryError::query_with_context(
            message.unwrap_or_else(|| code.to_string()),
            context,
        ),
        other => RepositoryError::query_with_context(other.to_string(), context),
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> Result<TodoRow, rusqlite::Error> {
    Ok(TodoRow {
        id: row.get(0)?,
        description: row.get(1)?,
        done: row.get(2)?,
    })
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> RepositoryResult<Vec<TodoItem>> {
        self.with_conn("list_todos", |conn| {
            let mut stmt = conn.prepare("SELECT id, description, done FROM todos")?;
            let rows = stmt.query_map([], row_to_item)?;
            let mut items = Vec::new();
            for row in rows {
                items.push(row?.into_item());
            }
            Ok(items)
        })
        .await
    }

    async fn get_todo(&self, id: TodoId) -> RepositoryResult<Option<TodoItem>> {
        self.with_conn("get_todo", move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, description, done FROM todos WHERE id = ?1",
                    params![id.value()],
                    row_to_item,
                )
                .optional()?;
            Ok(row.map(TodoRow::into_item))
        })
        .await
    }

    async fn create_todo(&self, item: &TodoItem) -> RepositoryResult<TodoItem> {
        if item.description.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "description must not be empty",
                ErrorContext::new("create_todo").with_entity("todo"),
            ));
        }

        // Any caller-supplied id is ignored; AUTOINCREMENT assigns one.
        let description = item.description.clone();
        let done = item.done;
        self.with_conn("create_todo", move |conn| {
            conn.execute(
                "INSERT INTO todos (description, done) VALUES (?1, ?2)",
                params![description, i64::from(done)],
            )?;
            let id = conn.last_insert_rowid();
            Ok(TodoItem {
                id: Some(TodoId::new(id)),
                description,
                done,
            })
        })
        .await
    }

    async fn update_todo(&self, item: &TodoItem) -> RepositoryResult<bool> {
        let id = item.id.ok_or_else(|| {
            RepositoryError::validation_with_context(
                "todo has no id",
                ErrorContext::new("update_todo").with_entity("todo"),
            )
        })?;

        let description = item.description.clone();
        let done = item.done;
        self.with_conn("update_todo", move |conn| {
            let changed = conn.execute(
                "UPDATE todos SET description = ?1, done = ?2 WHERE id = ?3",
                params![description, i64::from(done), id.value()],
            )?;
            Ok(changed == 1)
        })
        .await
    }

    async fn delete_todo(&self, id: TodoId) -> RepositoryResult<bool> {
        self.with_conn("delete_todo", move |conn| {
            let removed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id.value()])?;
            Ok(removed == 1)
        })
        .await
    }

    async fn delete_all_todos(&self) -> RepositoryResult<()> {
        self.with_conn("delete_all_todos", |conn| {
            conn.execute("DELETE FROM todos", [])?;
            Ok(())
        })
        .await
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(true)
        })
        .await
    }
}
