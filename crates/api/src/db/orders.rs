//! Order repository for database operations.

use std::time::Duration;

use retail_analytics_core::{Order, OrderId};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for order lookups.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, Order>(
                r#"
                SELECT order_id, customer_id, order_purchase_timestamp, approved_at,
                       delivered_carrier_date, delivered_customer_date,
                       estimated_delivery_date, status
                FROM retail."order"
                WHERE order_id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await
    }
}
