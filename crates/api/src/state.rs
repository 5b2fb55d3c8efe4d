use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the explicit storage context every repository call receives.
/// Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gearlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
