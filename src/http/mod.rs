//! HTTP server module for the todo backend.
//!
//! This module provides an axum-based HTTP server that exposes the todo
//! service as a REST API. It consumes the service layer and the repository
//! pattern from [`crate::db`].
//!
//! # Endpoints
//!
//! | Method | Path           | Success            | Failure           |
//! |--------|----------------|--------------------|-------------------|
//! | GET    | `/`            | 200 "Hello World"  | -                 |
//! | GET    | `/list`        | 200 JSON array     | 500               |
//! | GET    | `/get/{id}`    | 200 JSON item      | 400, 404, 500     |
//! | POST   | `/create`      | 200 created item   | 400, 500          |
//! | PUT    | `/update`      | 200 `{}`           | 400, 404, 500     |
//! | DELETE | `/delete/{id}` | 200 `{}`           | 400, 404, 500     |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
