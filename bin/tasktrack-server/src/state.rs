//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::db::sqlite::SqliteStore;

/// State shared across all HTTP handlers.
///
/// The store is constructed explicitly in `main` before the server starts
/// and closed after graceful shutdown; nothing here is a process-wide
/// singleton.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Task persistence gateway.
    pub store: Arc<SqliteStore>,
}
