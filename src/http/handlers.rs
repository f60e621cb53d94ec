//! HTTP handlers for the REST API.
//!
//! Each handler validates its input first and only then delegates to the
//! service layer; invalid input never reaches storage. Extractor rejections
//! are handled explicitly so a malformed path id or payload always maps to
//! 400 rather than axum's defaults.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::dto::{CreateTodoRequest, UpdateTodoRequest};
use super::error::AppError;
use super::state::AppState;
use crate::api::{TodoId, TodoItem};
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Validate a path id: it must have parsed as an integer and be positive.
fn parse_todo_id(path: Result<Path<i64>, PathRejection>) -> Result<TodoId, AppError> {
    let Path(raw) = path
        .map_err(|_| AppError::BadRequest("id must be a positive integer".to_string()))?;
    if raw < 1 {
        return Err(AppError::BadRequest(format!(
            "id must be a positive integer, got {}",
            raw
        )));
    }
    Ok(TodoId::new(raw))
}

/// GET /
///
/// Static liveness/welcome response.
pub async fn root() -> &'static str {
    "Hello World"
}

/// GET /list
///
/// List all todo items. Always 200 with a (possibly empty) JSON array.
pub async fn list_todos(State(state): State<AppState>) -> HandlerResult<Vec<TodoItem>> {
    let todos = services::list_todos(state.repository.as_ref()).await?;
    Ok(Json(todos))
}

/// GET /get/{id}
///
/// Fetch a single todo item; 404 when no row matches.
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<TodoItem> {
    let id = parse_todo_id(path)?;
    let todo = services::get_todo(state.repository.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no todo with id {}", id)))?;
    Ok(Json(todo))
}

/// POST /create
///
/// Create a new todo item; responds with the created item including the
/// store-assigned id.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> HandlerResult<TodoItem> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(format!("invalid create payload: {}", e)))?;
    if request.description.is_empty() {
        return Err(AppError::BadRequest(
            "description must not be empty".to_string(),
        ));
    }

    let item = TodoItem::new(request.description, request.done);
    let created = services::create_todo(state.repository.as_ref(), &item).await?;
    Ok(Json(created))
}

/// PUT /update
///
/// Replace description and done for an existing item; 404 when the id
/// matches no row.
pub async fn update_todo(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> HandlerResult<serde_json::Value> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(format!("invalid update payload: {}", e)))?;
    if request.id < 1 {
        return Err(AppError::BadRequest(format!(
            "id must be a positive integer, got {}",
            request.id
        )));
    }
    if request.description.is_empty() {
        return Err(AppError::BadRequest(
            "description must not be empty".to_string(),
        ));
    }

    let item = TodoItem {
        id: Some(TodoId::new(request.id)),
        description: request.description,
        done: request.done,
    };
    let modified = services::update_todo(state.repository.as_ref(), &item).await?;
    if !modified {
        return Err(AppError::NotFound(format!(
            "no todo with id {}",
            request.id
        )));
    }
    Ok(Json(serde_json::json!({})))
}

/// DELETE /delete/{id}
///
/// Delete a todo item; 404 when no row matched.
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<serde_json::Value> {
    let id = parse_todo_id(path)?;
    let removed = services::delete_todo(state.repository.as_ref(), id).await?;
    if !removed {
        return Err(AppError::NotFound(format!("no todo with id {}", id)));
    }
    Ok(Json(serde_json::json!({})))
}
