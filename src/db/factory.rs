//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::{LocalRepository, SqliteRepository};
use super::repository::{RepositoryError, RepositoryResult, TodoRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// SQLite file-backed implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("sqlite", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Sqlite when `TODO_DB` points at
    /// a database file, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("TODO_DB").is_ok() {
            Self::Sqlite
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use todo_rust::db::{RepositoryFactory, RepositoryType};
///
/// let sqlite_repo = RepositoryFactory::create_sqlite("todos.sqlite3", false)?;
/// let local_repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a SQLite repository.
    ///
    /// # Arguments
    /// * `path` - Database file path
    /// * `fresh` - Drop and recreate the schema (destructive)
    ///
    /// # Returns
    /// * `Ok(Arc<SqliteRepository>)` - SQLite repository instance
    /// * `Err(RepositoryError)` - If initialization fails
    pub fn create_sqlite<P: AsRef<Path>>(
        path: P,
        fresh: bool,
    ) -> RepositoryResult<Arc<SqliteRepository>> {
        let repo = SqliteRepository::open(path, fresh)?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn TodoRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` (or falls back on `TODO_DB` presence) to
    /// determine which repository to create. For the SQLite backend,
    /// `TODO_DB` gives the file path (default `todos.sqlite3`) and
    /// `TODO_DB_FRESH=1` requests a schema reset.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TodoRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn from_env() -> RepositoryResult<Arc<dyn TodoRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Sqlite => {
                let path =
                    std::env::var("TODO_DB").unwrap_or_else(|_| "todos.sqlite3".to_string());
                let fresh = std::env::var("TODO_DB_FRESH")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false);
                Ok(Self::create_sqlite(path, fresh)? as Arc<dyn TodoRepository>)
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TodoRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn TodoRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations and creates
    /// the appropriate repository instance.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn TodoRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn TodoRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Sqlite => Ok(
                Self::create_sqlite(&config.sqlite.path, config.sqlite.fresh)?
                    as Arc<dyn TodoRepository>,
            ),
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}
