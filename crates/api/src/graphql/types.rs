//! GraphQL object types.
//!
//! Field names are snake_case on the wire (`order_id`, `total_sales`, ...) to
//! match the documents the client UI sends. Timestamps are RFC 3339 strings.

use async_graphql::{ComplexObject, Context, Object, Result, SimpleObject};
use chrono::{DateTime, SecondsFormat, Utc};
use retail_analytics_core as model;
use rust_decimal::Decimal;

use super::error::GatewayError;
use crate::db::Store;

/// Format a store timestamp for the wire.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// =============================================================================
// Aggregation rows
// =============================================================================

/// Order-item count for one customer postal code.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ZipCodeCount {
    pub zip_code: Option<String>,
    pub count: i64,
}

impl From<model::ZipCodeCount> for ZipCodeCount {
    fn from(row: model::ZipCodeCount) -> Self {
        Self {
            zip_code: row.zip_code.map(String::from),
            count: row.count,
        }
    }
}

/// Order-item count for one of a seller's products.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ProductSales {
    pub product_id: String,
    pub product_category_name: Option<String>,
    /// Number of order-items, not revenue.
    pub total_sales: i64,
}

impl From<model::ProductSales> for ProductSales {
    fn from(row: model::ProductSales) -> Self {
        Self {
            product_id: row.product_id.into(),
            product_category_name: row.product_category_name,
            total_sales: row.total_sales,
        }
    }
}

/// A product from one of a customer's recent order-items.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CustomerProduct {
    pub product_id: String,
    pub product_category_name: Option<String>,
    pub order_purchase_timestamp: Option<String>,
}

impl From<model::CustomerProduct> for CustomerProduct {
    fn from(row: model::CustomerProduct) -> Self {
        Self {
            product_id: row.product_id.into(),
            product_category_name: row.product_category_name,
            order_purchase_timestamp: row.order_purchase_timestamp.map(format_timestamp),
        }
    }
}

/// Order-item count for one seller within a category.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct SellerSales {
    pub seller_id: Option<String>,
    /// Number of order-items, not revenue.
    pub total_sales: i64,
}

impl From<model::SellerSales> for SellerSales {
    fn from(row: model::SellerSales) -> Self {
        Self {
            seller_id: row.seller_id.map(String::from),
            total_sales: row.total_sales,
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Location data for a postal code.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Geolocation {
    pub zip_code: String,
    pub geolocation_city: Option<String>,
    pub geolocation_lat: Option<Decimal>,
    pub geolocation_lng: Option<Decimal>,
    pub geolocation_state: Option<String>,
}

impl From<model::Geolocation> for Geolocation {
    fn from(geo: model::Geolocation) -> Self {
        Self {
            zip_code: geo.zip_code.into(),
            geolocation_city: geo.geolocation_city,
            geolocation_lat: geo.geolocation_lat,
            geolocation_lng: geo.geolocation_lng,
            geolocation_state: geo.geolocation_state,
        }
    }
}

/// Resolve the geolocation for an optional postal code.
async fn geolocation_for(
    ctx: &Context<'_>,
    zip_code: Option<&model::ZipCode>,
) -> Result<Option<Geolocation>> {
    let Some(zip_code) = zip_code else {
        return Ok(None);
    };
    let store = ctx.data::<Store>()?;
    let geo = store
        .geolocation()
        .get_by_zip_code(zip_code)
        .await
        .map_err(GatewayError::store("fetch geolocation"))
        .map_err(GatewayError::into_graphql)?;
    Ok(geo.map(Geolocation::from))
}

/// A customer account.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Customer {
    pub customer_id: String,
    pub zip_code: Option<String>,
    #[graphql(skip)]
    zip: Option<model::ZipCode>,
}

#[ComplexObject(rename_fields = "snake_case")]
impl Customer {
    /// Location of the customer's postal code, if known.
    async fn geolocation(&self, ctx: &Context<'_>) -> Result<Option<Geolocation>> {
        geolocation_for(ctx, self.zip.as_ref()).await
    }
}

impl From<model::Customer> for Customer {
    fn from(customer: model::Customer) -> Self {
        Self {
            customer_id: customer.customer_id.into(),
            zip_code: customer.zip_code.as_ref().map(ToString::to_string),
            zip: customer.zip_code,
        }
    }
}

/// A marketplace seller.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Seller {
    pub seller_id: String,
    pub zip_code: Option<String>,
    #[graphql(skip)]
    zip: Option<model::ZipCode>,
}

#[ComplexObject(rename_fields = "snake_case")]
impl Seller {
    /// Location of the seller's postal code, if known.
    async fn geolocation(&self, ctx: &Context<'_>) -> Result<Option<Geolocation>> {
        geolocation_for(ctx, self.zip.as_ref()).await
    }
}

impl From<model::Seller> for Seller {
    fn from(seller: model::Seller) -> Self {
        Self {
            seller_id: seller.seller_id.into(),
            zip_code: seller.zip_code.as_ref().map(ToString::to_string),
            zip: seller.zip_code,
        }
    }
}

/// A catalog product.
pub struct Product(pub model::Product);

#[Object(rename_fields = "snake_case")]
impl Product {
    async fn product_id(&self) -> &str {
        self.0.product_id.as_str()
    }

    async fn product_category_name(&self) -> Option<&str> {
        self.0.product_category_name.as_deref()
    }

    async fn seller_id(&self) -> Option<&str> {
        self.0.seller_id.as_ref().map(model::SellerId::as_str)
    }

    async fn height(&self) -> Option<Decimal> {
        self.0.height
    }

    async fn width(&self) -> Option<Decimal> {
        self.0.width
    }

    async fn length(&self) -> Option<Decimal> {
        self.0.length
    }

    async fn weight(&self) -> Option<Decimal> {
        self.0.weight
    }

    /// The seller that owns this product.
    async fn seller(&self, ctx: &Context<'_>) -> Result<Option<Seller>> {
        let Some(seller_id) = &self.0.seller_id else {
            return Ok(None);
        };
        let store = ctx.data::<Store>()?;
        let seller = store
            .sellers()
            .get_by_id(seller_id)
            .await
            .map_err(GatewayError::store("fetch seller"))
            .map_err(GatewayError::into_graphql)?;
        Ok(seller.map(Seller::from))
    }
}

/// A customer order.
pub struct Order(pub model::Order);

#[Object(rename_fields = "snake_case")]
impl Order {
    async fn order_id(&self) -> &str {
        self.0.order_id.as_str()
    }

    async fn customer_id(&self) -> Option<&str> {
        self.0.customer_id.as_ref().map(model::CustomerId::as_str)
    }

    async fn order_purchase_timestamp(&self) -> Option<String> {
        self.0.order_purchase_timestamp.map(format_timestamp)
    }

    async fn approved_at(&self) -> Option<String> {
        self.0.approved_at.map(format_timestamp)
    }

    async fn delivered_carrier_date(&self) -> Option<String> {
        self.0.delivered_carrier_date.map(format_timestamp)
    }

    async fn delivered_customer_date(&self) -> Option<String> {
        self.0.delivered_customer_date.map(format_timestamp)
    }

    async fn estimated_delivery_date(&self) -> Option<String> {
        self.0.estimated_delivery_date.map(format_timestamp)
    }

    async fn status(&self) -> Option<&str> {
        self.0.status.as_deref()
    }

    /// Lines of this order.
    async fn items(&self, ctx: &Context<'_>) -> Result<Vec<OrderItem>> {
        let store = ctx.data::<Store>()?;
        let items = store
            .order_items()
            .list_by_order(&self.0.order_id)
            .await
            .map_err(GatewayError::store("fetch order items"))
            .map_err(GatewayError::into_graphql)?;
        Ok(items.into_iter().map(OrderItem).collect())
    }
}

/// One line of an order.
pub struct OrderItem(pub model::OrderItem);

#[Object(rename_fields = "snake_case")]
impl OrderItem {
    async fn order_item_id(&self) -> &str {
        self.0.order_item_id.as_str()
    }

    async fn order_id(&self) -> Option<&str> {
        self.0.order_id.as_ref().map(model::OrderId::as_str)
    }

    async fn product_id(&self) -> Option<&str> {
        self.0.product_id.as_ref().map(model::ProductId::as_str)
    }

    async fn price(&self) -> Option<Decimal> {
        self.0.price
    }

    async fn freight_value(&self) -> Option<Decimal> {
        self.0.freight_value
    }

    async fn shipping_limit_date(&self) -> Option<String> {
        self.0.shipping_limit_date.map(format_timestamp)
    }

    /// The product on this line.
    async fn product(&self, ctx: &Context<'_>) -> Result<Option<Product>> {
        let Some(product_id) = &self.0.product_id else {
            return Ok(None);
        };
        let store = ctx.data::<Store>()?;
        let product = store
            .products()
            .get_by_id(product_id)
            .await
            .map_err(GatewayError::store("fetch product"))
            .map_err(GatewayError::into_graphql)?;
        Ok(product.map(Product))
    }
}
