//! Read-only records for the six store tables.
//!
//! Field names match the column names. Everything except the key is nullable
//! in the source data, so it is `Option` here.
//!
//! ```text
//! geolocation 1─N customer 1─N order 1─N order_item N─1 product N─1 seller N─1 geolocation
//! ```
//!
//! The geolocation links go through `zip_code`, which is not a foreign key:
//! a postal code may have no geolocation row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CustomerId, OrderId, OrderItemId, ProductId, SellerId, ZipCode};

/// A customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: CustomerId,
    pub zip_code: Option<ZipCode>,
}

/// A marketplace seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Seller {
    pub seller_id: SellerId,
    pub zip_code: Option<ZipCode>,
}

/// Location data for a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Geolocation {
    pub zip_code: ZipCode,
    pub geolocation_city: Option<String>,
    pub geolocation_lat: Option<Decimal>,
    pub geolocation_lng: Option<Decimal>,
    /// State or region code.
    pub geolocation_state: Option<String>,
}

/// A catalog product, owned by exactly one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: ProductId,
    pub product_category_name: Option<String>,
    pub seller_id: Option<SellerId>,
    pub height: Option<Decimal>,
    pub width: Option<Decimal>,
    pub length: Option<Decimal>,
    pub weight: Option<Decimal>,
}

/// A customer order with its lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub order_purchase_timestamp: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub delivered_carrier_date: Option<DateTime<Utc>>,
    pub delivered_customer_date: Option<DateTime<Utc>>,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub order_item_id: OrderItemId,
    pub order_id: Option<OrderId>,
    pub product_id: Option<ProductId>,
    pub price: Option<Decimal>,
    pub freight_value: Option<Decimal>,
    pub shipping_limit_date: Option<DateTime<Utc>>,
}
