//! # Todo Rust Backend
//!
//! A small todo-list REST service. Clients create, list, fetch, update and
//! delete short text items with a completion flag; items live in a single
//! SQLite table. The service exposes the API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into three logical layers:
//!
//! - [`api`]: domain types shared across the layers ([`api::TodoItem`])
//! - [`db`]: repository trait, storage backends and the service layer
//! - [`http`]: Axum-based HTTP server, request validation and status mapping
//!
//! Control flow: HTTP request → handler validates input → service call →
//! repository executes a single SQL statement → outcome propagates back up
//! and is translated to a status code at the HTTP boundary. Validation
//! failures never reach the repository; backend failures are logged at the
//! HTTP boundary and surface as opaque 500 responses.

pub mod api;

pub mod db;

pub mod http;
