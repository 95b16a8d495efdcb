use std::sync::Arc;

use drivehub_core::rate_limit::FixedWindowLimiter;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: drivehub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fixed-window rate limiter for the form-intake endpoints. Injected
    /// here rather than global so deployments can swap in a shared store.
    pub rate_limiter: Arc<FixedWindowLimiter>,
}
