//! HTTP error handling with Sentry integration.
//!
//! GraphQL failures never reach this type: they travel inside the GraphQL
//! response (see [`crate::graphql::error`]). `AppError` covers the plain HTTP
//! routes around the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for non-GraphQL routes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] RepositoryError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose internal error details to clients
        let message = match &self {
            Self::StoreUnavailable(_) => "Store unavailable",
        };

        (self.status(), message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
