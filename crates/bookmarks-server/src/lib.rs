//! bookmarks-server: HTTP API server for the bookmarks service
//!
//! This crate provides:
//! - REST endpoints to list, create, fetch and delete bookmarks
//! - A static bearer token gate in front of every route
//! - An environment-aware responder for unexpected failures
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - Security headers and CORS handling
//! - Request ID generation
//! - Bearer token authentication
//! - Rendering of unexpected failures and panics
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks_server::{AppState, ServerConfig, routes};
//! use bookmarks_store::BookmarkStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_app(AppState::new(BookmarkStore::new(), config));
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, Environment, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookmarks_core;
pub use bookmarks_store;
