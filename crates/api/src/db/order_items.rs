//! Order-item repository for database operations.

use std::time::Duration;

use retail_analytics_core::{OrderId, OrderItem};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for order-item lookups.
pub struct OrderItemRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> OrderItemRepository<'a> {
    /// Create a new order-item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// List the lines of an order.
    ///
    /// Ordered by `order_item_id` so the listing is stable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_by_order(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, OrderItem>(
                r"
                SELECT order_item_id, order_id, product_id, price, freight_value,
                       shipping_limit_date
                FROM retail.order_item
                WHERE order_id = $1
                ORDER BY order_item_id
                ",
            )
            .bind(order_id)
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await
    }
}
