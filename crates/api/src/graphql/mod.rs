//! GraphQL query gateway.
//!
//! Read-only: a `Query` root and nothing else. The schema carries the
//! [`Store`] as context data; resolvers borrow it per request.

pub mod error;
pub mod query;
pub mod types;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use error::GatewayError;
pub use query::QueryRoot;

use crate::db::Store;

/// Maximum selection depth accepted per request.
pub const MAX_QUERY_DEPTH: usize = 10;

/// The gateway schema type.
pub type AnalyticsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the executable schema over an open store.
#[must_use]
pub fn build_schema(store: Store) -> AnalyticsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .limit_depth(MAX_QUERY_DEPTH)
        .extension(Tracing)
        .finish()
}

/// Export the schema as SDL. Needs no store.
#[must_use]
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use async_graphql::Value;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::graphql::error::{BAD_USER_INPUT, STORE_ERROR};

    /// A schema whose store is never contacted unless a resolver gets past
    /// argument validation.
    fn offline_schema() -> AnalyticsSchema {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://analytics@127.0.0.1:1/retail")
            .unwrap();
        build_schema(Store::new(pool, Duration::from_secs(1)))
    }

    fn error_code(response: &async_graphql::Response) -> Option<Value> {
        response
            .errors
            .first()
            .and_then(|err| err.extensions.as_ref())
            .and_then(|ext| ext.get("code"))
            .cloned()
    }

    #[test]
    fn test_sdl_exposes_wire_contract() {
        let sdl = export_sdl();
        assert!(sdl.contains("ordersBetweenDates(startDate: String!, endDate: String!): [Order!]!"));
        assert!(sdl.contains("topCustomerZipCodes(seller_id: String!): [ZipCodeCount!]!"));
        assert!(sdl.contains("topProductsBySeller(seller_id: String!): [ProductSales!]!"));
        assert!(
            sdl.contains("lastThreeProductsByCustomer(customer_id: String!): [CustomerProduct!]!")
        );
        assert!(sdl.contains("topSellersByCategory(category: String!): [SellerSales!]!"));
        assert!(sdl.contains("total_sales: Int!"));
        assert!(sdl.contains("order_purchase_timestamp: String"));
        assert!(!sdl.contains("sellerTotalRevenue"));
        assert!(!sdl.contains("type Mutation"));
    }

    #[tokio::test]
    async fn test_missing_argument_is_rejected() {
        let response = offline_schema()
            .execute("{ topProductsBySeller { product_id total_sales } }")
            .await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.data, Value::Null);
        assert!(response.errors[0].message.contains("seller_id"));
    }

    #[tokio::test]
    async fn test_blank_argument_is_bad_user_input() {
        let response = offline_schema()
            .execute(r#"{ topCustomerZipCodes(seller_id: "   ") { zip_code count } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "seller_id is required");
        assert_eq!(
            error_code(&response),
            Some(Value::String(BAD_USER_INPUT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_user_input() {
        let response = offline_schema()
            .execute(
                r#"{ ordersBetweenDates(startDate: "last week", endDate: "2018-01-31") { order_id } }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            r#"startDate is not a valid ISO date: "last week""#
        );
        assert_eq!(
            error_code(&response),
            Some(Value::String(BAD_USER_INPUT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_category_is_bad_user_input() {
        let response = offline_schema()
            .execute(r#"{ topSellersByCategory(category: "") { seller_id total_sales } }"#)
            .await;
        assert_eq!(response.errors[0].message, "category is required");
    }

    #[tokio::test]
    async fn test_revenue_operation_does_not_exist() {
        let response = offline_schema()
            .execute(r#"{ sellerTotalRevenue(seller_id: "s1") }"#)
            .await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_over_deep_query_is_rejected() {
        let response = offline_schema()
            .execute(
                "{ __schema { types { fields { type { ofType { ofType { ofType { ofType { ofType { ofType { name } } } } } } } } } } }",
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Query is nested too deep.");
        assert_eq!(response.data, Value::Null);
    }

    #[tokio::test]
    async fn test_deepest_entity_lookup_is_within_limit() {
        let response = offline_schema()
            .execute(
                r#"{ order(order_id: "o1") { items { product { seller { geolocation { geolocation_city } } } } } }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(
            response.errors[0]
                .message
                .starts_with("Failed to fetch order: "),
            "{}",
            response.errors[0].message
        );
        assert_eq!(
            error_code(&response),
            Some(Value::String(STORE_ERROR.to_string()))
        );
    }
}
