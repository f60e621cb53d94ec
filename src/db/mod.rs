//! Database module for todo storage.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing the backend to be swapped (and faked in
//! tests) without touching the layers above.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/)                                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - delegation seam           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - abstract interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────────┴─────────────────────┐
//!     │  SqliteRepository     LocalRepository    │
//!     │   (durable)            (in-memory)       │
//!     └─────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `services`: delegation functions consumed by the HTTP handlers
//! - `repository`: trait definition and error types
//! - `repositories::sqlite`: durable SQLite implementation
//! - `repositories::local`: in-memory implementation for tests and dev
//! - `factory`: factory for creating repository instances
//! - `repo_config`: `repository.toml` support

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::{LocalRepository, SqliteRepository};
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, TodoRepository};
