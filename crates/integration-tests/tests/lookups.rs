//! Keyed entity reads against the fixture database.
//!
//! These tests require `ANALYTICS_TEST_DATABASE_URL` pointing at a throwaway
//! `PostgreSQL` database.

#![allow(clippy::unwrap_used)]

use retail_analytics_core::{CustomerId, OrderId, ProductId, SellerId, ZipCode};
use retail_analytics_integration_tests::fixture_store;

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_customer_lookup() {
    let store = fixture_store().await;

    let customer = store
        .customers()
        .get_by_id(&CustomerId::new("c1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customer.zip_code, Some(ZipCode::new("01001")));

    let missing = store
        .customers()
        .get_by_id(&CustomerId::new("nobody"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_geolocation_by_zip_code() {
    let store = fixture_store().await;

    let geo = store
        .geolocation()
        .get_by_zip_code(&ZipCode::new("20010"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(geo.geolocation_city.as_deref(), Some("rio de janeiro"));
    assert_eq!(geo.geolocation_state.as_deref(), Some("RJ"));

    // Customer c3's code has no geolocation row
    let none = store
        .geolocation()
        .get_by_zip_code(&ZipCode::new("01003"))
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_seller_and_product_lookup() {
    let store = fixture_store().await;

    let product = store
        .products()
        .get_by_id(&ProductId::new("p3"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.product_category_name, None);
    assert_eq!(product.seller_id, Some(SellerId::new("s1")));

    let seller = store
        .sellers()
        .get_by_id(&SellerId::new("s3"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(seller.zip_code, None);
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_order_with_items() {
    let store = fixture_store().await;
    let order_id = OrderId::new("o2");

    let order = store.orders().get_by_id(&order_id).await.unwrap().unwrap();
    assert_eq!(order.customer_id, Some(CustomerId::new("c2")));
    assert_eq!(order.status.as_deref(), Some("processing"));
    assert!(order.approved_at.is_none());

    let items = store.order_items().list_by_order(&order_id).await.unwrap();
    let ids: Vec<_> = items.iter().map(|i| i.order_item_id.as_str()).collect();
    assert_eq!(ids, ["i02", "i07", "i11"]);
}

#[tokio::test]
#[ignore = "Requires ANALYTICS_TEST_DATABASE_URL"]
async fn test_ping_and_close() {
    let store = fixture_store().await;
    store.ping().await.unwrap();
    store.close().await;
    assert!(store.ping().await.is_err());
}
