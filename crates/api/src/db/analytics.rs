//! Aggregation queries over orders and order-items.
//!
//! Each operation joins the minimal set of tables, groups, ranks by a count of
//! order-item rows, and truncates to a fixed size. None of them paginate.
//! Ties are broken by the grouping key so results are stable across calls.
//!
//! All queries are runtime-checked (`sqlx::query`) so the crate builds without
//! a database or an offline query cache.

use std::time::Duration;

use retail_analytics_core::{
    Category, CustomerId, CustomerProduct, DateRange, LAST_PRODUCTS_LIMIT, Order, ProductSales,
    SellerId, SellerSales, TOP_PRODUCTS_LIMIT, TOP_SELLERS_LIMIT, TOP_ZIP_CODES_LIMIT,
    ZipCodeCount,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use super::{RepositoryError, decode_count, with_timeout};

/// Repository for the aggregation operations.
pub struct AnalyticsRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> AnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Orders whose purchase timestamp lies in `range`, bounds included.
    ///
    /// Returned in store order. Orders without a purchase timestamp never match.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::Timeout` if it exceeds the configured bound.
    #[instrument(skip(self), fields(start = %range.start(), end = %range.end()))]
    pub async fn orders_between_dates(&self, range: DateRange) -> Result<Vec<Order>, RepositoryError> {
        let orders = with_timeout(self.timeout, async {
            sqlx::query_as::<_, Order>(
                r#"
                SELECT order_id, customer_id, order_purchase_timestamp, approved_at,
                       delivered_carrier_date, delivered_customer_date,
                       estimated_delivery_date, status
                FROM retail."order"
                WHERE order_purchase_timestamp BETWEEN $1 AND $2
                "#,
            )
            .bind(range.start())
            .bind(range.end())
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await?;

        tracing::debug!(rows = orders.len(), "orders between dates");
        Ok(orders)
    }

    /// Customer postal codes that received the most of a seller's order-items.
    ///
    /// At most 5 rows, count descending. Customers without a postal code form
    /// their own group.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails, times out, or a count
    /// cannot be read as an integer.
    #[instrument(skip(self))]
    pub async fn top_customer_zip_codes(
        &self,
        seller_id: &SellerId,
    ) -> Result<Vec<ZipCodeCount>, RepositoryError> {
        let rows = with_timeout(self.timeout, async {
            sqlx::query(
                r#"
                SELECT c.zip_code, COUNT(*) AS item_count
                FROM retail.order_item oi
                JOIN retail.product p ON p.product_id = oi.product_id
                JOIN retail."order" o ON o.order_id = oi.order_id
                JOIN retail.customer c ON c.customer_id = o.customer_id
                WHERE p.seller_id = $1
                GROUP BY c.zip_code
                ORDER BY item_count DESC, c.zip_code ASC NULLS LAST
                LIMIT $2
                "#,
            )
            .bind(seller_id)
            .bind(TOP_ZIP_CODES_LIMIT)
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await?;

        rows.iter().map(zip_code_count_from_row).collect()
    }

    /// A seller's best-selling products by number of order-items.
    ///
    /// At most 3 rows, count descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails, times out, or a count
    /// cannot be read as an integer.
    #[instrument(skip(self))]
    pub async fn top_products_by_seller(
        &self,
        seller_id: &SellerId,
    ) -> Result<Vec<ProductSales>, RepositoryError> {
        let rows = with_timeout(self.timeout, async {
            sqlx::query(
                r"
                SELECT p.product_id, p.product_category_name, COUNT(*) AS item_count
                FROM retail.order_item oi
                JOIN retail.product p ON p.product_id = oi.product_id
                WHERE p.seller_id = $1
                GROUP BY p.product_id, p.product_category_name
                ORDER BY item_count DESC, p.product_id ASC
                LIMIT $2
                ",
            )
            .bind(seller_id)
            .bind(TOP_PRODUCTS_LIMIT)
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await?;

        rows.iter().map(product_sales_from_row).collect()
    }

    /// The products on a customer's most recent order-items.
    ///
    /// At most 3 rows, newest purchase first; order-items whose order has no
    /// purchase timestamp sort last.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::Timeout` if it exceeds the configured bound.
    #[instrument(skip(self))]
    pub async fn last_products_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<CustomerProduct>, RepositoryError> {
        let rows = with_timeout(self.timeout, async {
            sqlx::query(
                r#"
                SELECT p.product_id, p.product_category_name, o.order_purchase_timestamp
                FROM retail.order_item oi
                JOIN retail."order" o ON o.order_id = oi.order_id
                JOIN retail.product p ON p.product_id = oi.product_id
                WHERE o.customer_id = $1
                ORDER BY o.order_purchase_timestamp DESC NULLS LAST, oi.order_item_id ASC
                LIMIT $2
                "#,
            )
            .bind(customer_id)
            .bind(LAST_PRODUCTS_LIMIT)
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await?;

        rows.iter().map(customer_product_from_row).collect()
    }

    /// Sellers with the most order-items in a product category.
    ///
    /// At most 5 rows, count descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails, times out, or a count
    /// cannot be read as an integer.
    #[instrument(skip(self))]
    pub async fn top_sellers_by_category(
        &self,
        category: &Category,
    ) -> Result<Vec<SellerSales>, RepositoryError> {
        let rows = with_timeout(self.timeout, async {
            sqlx::query(
                r"
                SELECT p.seller_id, COUNT(*) AS item_count
                FROM retail.order_item oi
                JOIN retail.product p ON p.product_id = oi.product_id
                WHERE p.product_category_name = $1
                GROUP BY p.seller_id
                ORDER BY item_count DESC, p.seller_id ASC NULLS LAST
                LIMIT $2
                ",
            )
            .bind(category.as_str())
            .bind(TOP_SELLERS_LIMIT)
            .fetch_all(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await?;

        rows.iter().map(seller_sales_from_row).collect()
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

fn zip_code_count_from_row(row: &PgRow) -> Result<ZipCodeCount, RepositoryError> {
    Ok(ZipCodeCount {
        zip_code: row.try_get("zip_code")?,
        count: decode_count(row, "item_count")?,
    })
}

fn product_sales_from_row(row: &PgRow) -> Result<ProductSales, RepositoryError> {
    Ok(ProductSales {
        product_id: row.try_get("product_id")?,
        product_category_name: row.try_get("product_category_name")?,
        total_sales: decode_count(row, "item_count")?,
    })
}

fn customer_product_from_row(row: &PgRow) -> Result<CustomerProduct, RepositoryError> {
    Ok(CustomerProduct {
        product_id: row.try_get("product_id")?,
        product_category_name: row.try_get("product_category_name")?,
        order_purchase_timestamp: row.try_get("order_purchase_timestamp")?,
    })
}

fn seller_sales_from_row(row: &PgRow) -> Result<SellerSales, RepositoryError> {
    Ok(SellerSales {
        seller_id: row.try_get("seller_id")?,
        total_sales: decode_count(row, "item_count")?,
    })
}
