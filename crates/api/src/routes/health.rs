//! Liveness and readiness probes.

use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Runs `SELECT 1` against the store under the query timeout.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store is not reachable.
#[instrument(skip(state))]
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str> {
    state.store().ping().await?;
    Ok("ok")
}
