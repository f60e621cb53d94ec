//! Todo HTTP Server Binary
//!
//! Main entry point for the todo REST API server. It initializes the
//! repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin todo-server
//!
//! # Run against a SQLite file
//! TODO_DB=prod.sqlite3 cargo run --bin todo-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 4000)
//! - `REPOSITORY_TYPE`: "sqlite" or "local"
//! - `TODO_DB`: SQLite database file path (implies the sqlite backend)
//! - `TODO_DB_FRESH`: set to 1 to drop and recreate the schema (dev only)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use todo_rust::db::RepositoryFactory;
use todo_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting todo HTTP server");

    // A repository that cannot be opened is a fatal startup error.
    let repository = RepositoryFactory::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!("Repository initialized successfully");

    // Create application state and the router
    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
