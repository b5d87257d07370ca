//! Seller repository for database operations.

use std::time::Duration;

use retail_analytics_core::{Seller, SellerId};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for seller lookups.
pub struct SellerRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> SellerRepository<'a> {
    /// Create a new seller repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get a seller by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &SellerId) -> Result<Option<Seller>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, Seller>(
                r"
                SELECT seller_id, zip_code
                FROM retail.seller
                WHERE seller_id = $1
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
