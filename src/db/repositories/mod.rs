//! Repository implementations module.
//!
//! This module contains the implementations of the `TodoRepository` trait:
//! - `sqlite`: durable SQLite implementation
//! - `local`: in-memory implementation for unit testing and local development
pub mod local;
pub mod sqlite;

pub use local::LocalRepository;
pub use sqlite::SqliteRepository;
