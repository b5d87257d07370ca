//! GraphQL documents executed in-process over the fixture store.
//!
//! These tests require `ANALYTICS_TEST_DATABASE_URL` pointing at a throwaway
//! `PostgreSQL` database.

#![allow(clippy::unwrap_used)]

use async_graphql::{Request, Variables};
use retail_analytics_api::graphql::build_schema;
use retail_analytics_integration_tests::fixture_store;
use serde_json::{Value, json};

async fn execute(query: &str, variables: Value) -> Value {
    let schema = build_schema(fixture_store().await);
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    serde_json::to_value(&response).unwrap()
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_orders_between_dates_document() {
    let body = execute(
        "query($startDate: String!, $endDate: String!) {
            ordersBetweenDates(startDate: $startDate, endDate: $endDate) {
                order_id
                order_purchase_timestamp
            }
        }",
        json!({ "startDate": "2018-01-01", "endDate": "2018-01-31" }),
    )
    .await;

    assert!(body.get("errors").is_none(), "{body}");
    let mut orders = body["data"]["ordersBetweenDates"].as_array().unwrap().clone();
    orders.sort_by_key(|o| o["order_id"].as_str().unwrap().to_string());
    assert_eq!(
        Value::Array(orders),
        json!([
            { "order_id": "o1", "order_purchase_timestamp": "2018-01-15T10:00:00Z" },
            { "order_id": "o3", "order_purchase_timestamp": "2018-01-01T00:00:00Z" },
        ])
    );
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_top_products_document() {
    let body = execute(
        "query($sellerId: String!) {
            topProductsBySeller(seller_id: $sellerId) {
                product_id
                product_category_name
                total_sales
            }
        }",
        json!({ "sellerId": "s1" }),
    )
    .await;

    assert_eq!(
        body["data"]["topProductsBySeller"],
        json!([
            { "product_id": "p2", "product_category_name": "perfumaria", "total_sales": 5 },
            { "product_id": "p1", "product_category_name": "perfumaria", "total_sales": 3 },
            { "product_id": "p3", "product_category_name": null, "total_sales": 2 },
        ])
    );
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_zip_codes_and_sellers_documents() {
    let body = execute(
        r#"{
            topCustomerZipCodes(seller_id: "s1") { zip_code count }
            topSellersByCategory(category: "perfumaria") { seller_id total_sales }
        }"#,
        json!({}),
    )
    .await;

    assert_eq!(body["data"]["topCustomerZipCodes"][0], json!({ "zip_code": "01001", "count": 4 }));
    assert_eq!(body["data"]["topCustomerZipCodes"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["data"]["topSellersByCategory"][0],
        json!({ "seller_id": "s1", "total_sales": 8 })
    );
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_nested_lookup_document() {
    let body = execute(
        r#"{
            order(order_id: "o1") {
                status
                items {
                    order_item_id
                    product {
                        product_id
                        seller { seller_id geolocation { geolocation_city } }
                    }
                }
            }
            customer(customer_id: "c3") { zip_code geolocation { geolocation_city } }
        }"#,
        json!({}),
    )
    .await;

    assert!(body.get("errors").is_none(), "{body}");
    let order = &body["data"]["order"];
    assert_eq!(order["status"], "delivered");
    assert_eq!(order["items"][0]["order_item_id"], "i01");
    assert_eq!(
        order["items"][0]["product"]["seller"]["geolocation"]["geolocation_city"],
        "rio de janeiro"
    );
    assert_eq!(body["data"]["customer"]["zip_code"], "01003");
    assert_eq!(body["data"]["customer"]["geolocation"], Value::Null);
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_store_error_is_reported() {
    let store = fixture_store().await;
    store.close().await;
    let schema = build_schema(store);

    let response = schema
        .execute(r#"{ topSellersByCategory(category: "perfumaria") { seller_id } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    assert!(
        response.errors[0]
            .message
            .starts_with("Failed to fetch top sellers: ")
    );
    let code = response.errors[0]
        .extensions
        .as_ref()
        .and_then(|ext| ext.get("code"))
        .cloned();
    assert_eq!(code, Some(async_graphql::Value::String("STORE_ERROR".to_string())));
}
