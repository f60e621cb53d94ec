//! Shared helpers and repository doubles for the API tests.
//!
//! Requests go through `tower::ServiceExt::oneshot` against the real
//! router, so every test exercises routing, extraction and status mapping
//! exactly as the server would.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use todo_rust::api::{TodoId, TodoItem};
use todo_rust::db::repositories::LocalRepository;
use todo_rust::db::repository::{RepositoryError, RepositoryResult, TodoRepository};
use todo_rust::http::{create_router, AppState};

/// Router backed by a fresh in-memory repository; the repository handle is
/// returned too so tests can reach behind the API (reset, break).
pub fn local_router() -> (Router, Arc<LocalRepository>) {
    let repo = Arc::new(LocalRepository::new());
    let state = AppState::new(repo.clone());
    (create_router(state), repo)
}

/// Router over an arbitrary repository (used with the doubles below).
pub fn router_with(repo: Arc<dyn TodoRepository>) -> Router {
    create_router(AppState::new(repo))
}

/// Send one request; returns status and raw body bytes.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request build failed"))
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    (status, bytes.to_vec())
}

/// Create a todo through the API and check the response against the id the
/// store is expected to assign next. Every even item is created done.
pub async fn create_todo(router: &Router, expected_id: i64) -> TodoItem {
    let todo = TodoItem::new(format!("todo {}", expected_id), expected_id % 2 == 0);
    let (status, body) = send(
        router,
        Method::POST,
        "/create",
        Some(serde_json::to_value(&todo).expect("serialize todo")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let created: TodoItem = serde_json::from_slice(&body).expect("parse created todo");
    assert_eq!(created.description, todo.description);
    assert_eq!(created.done, todo.done);
    assert_eq!(created.id_value(), Some(expected_id));
    created
}

/// GET /list, asserting 200.
pub async fn get_todo_list(router: &Router) -> Vec<TodoItem> {
    let (status, body) = send(router, Method::GET, "/list", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("parse todo list")
}

/// DELETE /delete/{id}, returning the status so callers can check it.
pub async fn delete_todo(router: &Router, id: i64) -> StatusCode {
    send(router, Method::DELETE, &format!("/delete/{}", id), None)
        .await
        .0
}

/// PUT /update with an arbitrary payload, returning the status.
pub async fn update_todo(router: &Router, payload: serde_json::Value) -> StatusCode {
    send(router, Method::PUT, "/update", Some(payload)).await.0
}

/// Counts every repository call and fails it.
///
/// Validation tests wire this in and assert the count stays at zero: a
/// request rejected at the HTTP boundary must never reach the store.
#[derive(Default)]
pub struct RecordingRepository {
    calls: AtomicUsize,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> RepositoryError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        RepositoryError::internal("repository should not have been reached")
    }
}

#[async_trait]
impl TodoRepository for RecordingRepository {
    async fn list_todos(&self) -> RepositoryResult<Vec<TodoItem>> {
        Err(self.record())
    }

    async fn get_todo(&self, _id: TodoId) -> RepositoryResult<Option<TodoItem>> {
        Err(self.record())
    }

    async fn create_todo(&self, _item: &TodoItem) -> RepositoryResult<TodoItem> {
        Err(self.record())
    }

    async fn update_todo(&self, _item: &TodoItem) -> RepositoryResult<bool> {
        Err(self.record())
    }

    async fn delete_todo(&self, _id: TodoId) -> RepositoryResult<bool> {
        Err(self.record())
    }

    async fn delete_all_todos(&self) -> RepositoryResult<()> {
        Err(self.record())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Err(self.record())
    }
}
