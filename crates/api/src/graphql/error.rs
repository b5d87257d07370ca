//! Gateway error mapping with Sentry integration.
//!
//! Resolvers work in `Result<T, GatewayError>` and convert at the GraphQL
//! boundary with [`GatewayError::into_graphql`], which logs store failures in
//! full server-side and hands the caller a single message plus an
//! `extensions.code`.

use async_graphql::ErrorExtensions;
use retail_analytics_core::ArgumentError;
use thiserror::Error;

use crate::db::RepositoryError;

/// Error code for rejected arguments.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
/// Error code for store failures.
pub const STORE_ERROR: &str = "STORE_ERROR";

/// Errors surfaced by the query gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required argument was missing or malformed. Nothing was queried.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// The store call failed.
    #[error("Failed to {operation}: {source}")]
    Store {
        /// What the gateway was doing, e.g. "fetch orders".
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl GatewayError {
    /// Build a mapper that tags a repository error with the operation name.
    pub fn store(operation: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Store { operation, source }
    }

    /// Value for `extensions.code`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Argument(_) => BAD_USER_INPUT,
            Self::Store { .. } => STORE_ERROR,
        }
    }

    /// Message returned to the caller.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Argument(err) => err.to_string(),
            Self::Store { operation, source } => {
                format!("Failed to {operation}: {}", source.client_message())
            }
        }
    }

    /// Report and convert into a GraphQL error.
    ///
    /// Store failures are captured to Sentry and logged with the full sqlx
    /// error; argument errors are logged at debug level only.
    #[must_use]
    pub fn into_graphql(self) -> async_graphql::Error {
        match &self {
            Self::Store { operation, source } => {
                let event_id = sentry::capture_error(source);
                tracing::error!(
                    operation,
                    error = %source,
                    detail = ?source,
                    sentry_event_id = %event_id,
                    "Store query failed"
                );
            }
            Self::Argument(err) => {
                tracing::debug!(argument = err.argument(), error = %err, "Rejected argument");
            }
        }
        self.extend()
    }
}

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        let mut error = async_graphql::Error::new(self.client_message()).extend_with(|_, e| {
            e.set("code", code);
        });
        if let Self::Argument(err) = self {
            let argument = err.argument();
            error = error.extend_with(|_, e| e.set("argument", argument));
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn extension(err: &async_graphql::Error, key: &str) -> Option<String> {
        err.extensions
            .as_ref()
            .and_then(|ext| ext.get(key))
            .map(ToString::to_string)
    }

    #[test]
    fn test_argument_error_message_and_code() {
        let err = GatewayError::from(ArgumentError::Missing("seller_id"));
        assert_eq!(err.client_message(), "seller_id is required");
        assert_eq!(err.code(), BAD_USER_INPUT);

        let gql = err.into_graphql();
        assert_eq!(gql.message, "seller_id is required");
        assert_eq!(extension(&gql, "code").as_deref(), Some("\"BAD_USER_INPUT\""));
        assert_eq!(extension(&gql, "argument").as_deref(), Some("\"seller_id\""));
    }

    #[test]
    fn test_store_error_message_includes_store_text_only() {
        let err = GatewayError::store("fetch orders")(RepositoryError::Timeout(
            Duration::from_secs(10),
        ));
        assert_eq!(err.code(), STORE_ERROR);
        assert_eq!(
            err.client_message(),
            "Failed to fetch orders: query timed out after 10s"
        );

        let err = GatewayError::store("fetch top sellers")(RepositoryError::DataCorruption(
            "column item_count is not a count".to_string(),
        ));
        let gql = err.into_graphql();
        assert_eq!(
            gql.message,
            "Failed to fetch top sellers: unexpected data in store"
        );
        assert!(!gql.message.contains("item_count"));
        assert_eq!(extension(&gql, "code").as_deref(), Some("\"STORE_ERROR\""));
        assert_eq!(extension(&gql, "argument"), None);
    }
}
