//! Read-only data access for the retail `PostgreSQL` store.
//!
//! # Database: schema `retail`
//!
//! Reference data owned by the store; this crate never writes to it and never
//! migrates it.
//!
//! ## Tables
//!
//! - `customer` - Customer accounts and their postal codes
//! - `seller` - Sellers and their postal codes
//! - `geolocation` - City, state and coordinates per postal code
//! - `product` - Catalog products, each owned by a seller
//! - `"order"` - Orders with lifecycle timestamps
//! - `order_item` - Order lines referencing an order and a product
//!
//! One repository per entity for keyed lookups, plus
//! [`analytics::AnalyticsRepository`] for the grouped/ranked aggregations.
//! Every call is bounded by the per-request timeout carried in [`Store`].

pub mod analytics;
pub mod customers;
pub mod geolocation;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sellers;

use std::future::Future;
use std::time::Duration;

use retail_analytics_core::{CountError, CountValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::Row;
use sqlx::postgres::{PgPoolOptions, PgRow};
use thiserror::Error;

pub use analytics::AnalyticsRepository;
pub use customers::CustomerRepository;
pub use geolocation::GeolocationRepository;
pub use order_items::OrderItemRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use sellers::SellerRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The store did not answer within the per-request bound.
    #[error("query timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl RepositoryError {
    /// Message safe to show a caller.
    ///
    /// Carries the store's own message text (e.g. `relation "x" does not exist`)
    /// but none of sqlx's debug structure.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.message().to_owned(),
            Self::Database(sqlx::Error::PoolTimedOut) => "connection pool timed out".to_owned(),
            Self::Database(sqlx::Error::PoolClosed) => "connection pool closed".to_owned(),
            Self::Database(sqlx::Error::Io(_) | sqlx::Error::Tls(_)) => {
                "database unreachable".to_owned()
            }
            Self::Database(_) => "database error".to_owned(),
            Self::DataCorruption(_) => "unexpected data in store".to_owned(),
            Self::Timeout(_) => self.to_string(),
        }
    }
}

impl From<CountError> for RepositoryError {
    fn from(err: CountError) -> Self {
        Self::DataCorruption(err.to_string())
    }
}

/// Handle to the store: the connection pool plus the per-call bound.
///
/// Opened once at startup, cloned into whatever needs it (cheap: `PgPool` is
/// reference-counted), and closed at shutdown via [`Store::close`].
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
    timeout: Duration,
}

impl Store {
    /// Wrap an open pool.
    #[must_use]
    pub const fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    #[must_use]
    pub const fn analytics(&self) -> AnalyticsRepository<'_> {
        AnalyticsRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn customers(&self) -> CustomerRepository<'_> {
        CustomerRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn sellers(&self) -> SellerRepository<'_> {
        SellerRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn geolocation(&self) -> GeolocationRepository<'_> {
        GeolocationRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.pool, self.timeout)
    }

    #[must_use]
    pub const fn order_items(&self) -> OrderItemRepository<'_> {
        OrderItemRepository::new(&self.pool, self.timeout)
    }

    /// Check that the store answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or times out.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map(|_| ())
                .map_err(RepositoryError::from)
        })
        .await
    }

    /// Close all pooled connections, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Run a store call under a timeout.
///
/// # Errors
///
/// Returns `RepositoryError::Timeout` if `fut` does not finish in time,
/// otherwise whatever `fut` returns.
pub async fn with_timeout<T, F>(timeout: Duration, fut: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| RepositoryError::Timeout(timeout))?
}

/// Read a count column, accepting any numeric or textual representation.
///
/// # Errors
///
/// Returns `RepositoryError::DataCorruption` if the column is missing, NULL,
/// or not an integral non-negative number.
pub fn decode_count(row: &PgRow, column: &str) -> Result<i64, RepositoryError> {
    let value = if let Ok(n) = row.try_get::<i64, _>(column) {
        CountValue::from(n)
    } else if let Ok(n) = row.try_get::<i32, _>(column) {
        CountValue::from(n)
    } else if let Ok(d) = row.try_get::<Decimal, _>(column) {
        CountValue::from(d)
    } else if let Ok(s) = row.try_get::<String, _>(column) {
        CountValue::from(s)
    } else {
        return Err(RepositoryError::DataCorruption(format!(
            "column {column} is not a count"
        )));
    };

    Ok(value.into_count()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = RepositoryError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "query timed out after 10s");
        assert_eq!(err.client_message(), "query timed out after 10s");
    }

    #[test]
    fn test_client_message_hides_corruption_detail() {
        let err = RepositoryError::DataCorruption("column count is not a count".to_string());
        assert_eq!(err.client_message(), "unexpected data in store");
    }

    #[test]
    fn test_client_message_for_pool_errors() {
        let err = RepositoryError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), "connection pool timed out");
        let err = RepositoryError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.client_message(), "database error");
    }

    #[test]
    fn test_count_error_is_data_corruption() {
        let err = RepositoryError::from(CountError::Negative(-2));
        assert!(matches!(err, RepositoryError::DataCorruption(msg) if msg.contains("-2")));
    }

    #[tokio::test]
    async fn test_with_timeout_elapses() {
        let result: Result<(), _> = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(RepositoryError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_through() {
        let result = with_timeout(Duration::from_secs(1), async { Ok(7) }).await;
        assert!(matches!(result, Ok(7)));

        let result: Result<(), _> = with_timeout(Duration::from_secs(1), async {
            Err(RepositoryError::DataCorruption("bad".to_string()))
        })
        .await;
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
