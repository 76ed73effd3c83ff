//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::db;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// With a database-backed session store, verifies connectivity and returns
/// 503 Service Unavailable if the database is not reachable. The in-memory
/// store is always ready.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.pool() {
        Some(pool) if !db::ping(pool).await => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}
