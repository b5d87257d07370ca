//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Client UI
//! GET  /static/*      - UI assets
//! POST /graphql       - GraphQL endpoint
//! GET  /graphql       - GraphiQL explorer
//! GET  /health        - Liveness
//! GET  /health/ready  - Readiness (store reachable)
//! ```

pub mod graphql;
pub mod health;
pub mod ui;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ui::index))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}
