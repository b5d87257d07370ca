//! Customer repository for database operations.

use std::time::Duration;

use retail_analytics_core::{Customer, CustomerId};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for customer lookups.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, Customer>(
                r"
                SELECT customer_id, zip_code
                FROM retail.customer
                WHERE customer_id = $1
                ",
            )
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await
    }
}
