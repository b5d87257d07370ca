//! Product repository for database operations.

use std::time::Duration;

use retail_analytics_core::{Product, ProductId};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for product lookups.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, Product>(
                r"
                SELECT product_id, product_category_name, seller_id,
                       height, width, length, weight
                FROM retail.product
                WHERE product_id = $1
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
