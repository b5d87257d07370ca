//! Row shapes produced by the aggregation operations.
//!
//! "Sales" throughout means a count of order-item rows, not revenue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ProductId, SellerId, ZipCode};

/// Row limit for `top_customer_zip_codes`.
pub const TOP_ZIP_CODES_LIMIT: i64 = 5;
/// Row limit for `top_products_by_seller`.
pub const TOP_PRODUCTS_LIMIT: i64 = 3;
/// Row limit for `last_products_by_customer`.
pub const LAST_PRODUCTS_LIMIT: i64 = 3;
/// Row limit for `top_sellers_by_category`.
pub const TOP_SELLERS_LIMIT: i64 = 5;

/// Number of a seller's order-items shipped to one customer postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodeCount {
    /// `None` groups customers without a postal code.
    pub zip_code: Option<ZipCode>,
    pub count: i64,
}

/// Order-items sold for one of a seller's products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub product_category_name: Option<String>,
    pub total_sales: i64,
}

/// A product a customer bought, with the purchase time of its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProduct {
    pub product_id: ProductId,
    pub product_category_name: Option<String>,
    pub order_purchase_timestamp: Option<DateTime<Utc>>,
}

/// Order-items sold by one seller within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerSales {
    /// `None` groups products with no owning seller.
    pub seller_id: Option<SellerId>,
    pub total_sales: i64,
}

/// Whether `counts` is sorted descending, the ranking every top-N operation
/// guarantees.
#[must_use]
pub fn is_ranked(counts: &[i64]) -> bool {
    counts.windows(2).all(|w| matches!(w, [a, b] if a >= b))
}
