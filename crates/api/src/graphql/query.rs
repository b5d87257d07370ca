//! Query root: the five aggregations plus keyed entity lookups.
//!
//! Resolvers validate their arguments into core types first, so a blank or
//! malformed argument never reaches the store. The store work lives in the
//! `fetch_*` functions below, which return `GatewayError`; the resolvers only
//! convert at the boundary.

use async_graphql::{Context, Object, Result};
use retail_analytics_core::{Category, CustomerId, DateRange, OrderId, ProductId, SellerId};

use super::error::GatewayError;
use super::types::{
    Customer, CustomerProduct, Order, Product, ProductSales, Seller, SellerSales, ZipCodeCount,
};
use crate::db::Store;

/// Root query object.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(rename_args = "snake_case")]
impl QueryRoot {
    /// Orders purchased between `startDate` and `endDate`, both inclusive.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` (UTC) or RFC 3339.
    async fn orders_between_dates(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "startDate")] start_date: String,
        #[graphql(name = "endDate")] end_date: String,
    ) -> Result<Vec<Order>> {
        let store = ctx.data::<Store>()?;
        fetch_orders_between_dates(store, &start_date, &end_date)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// The 5 customer postal codes that received the most of a seller's
    /// order-items.
    async fn top_customer_zip_codes(
        &self,
        ctx: &Context<'_>,
        seller_id: String,
    ) -> Result<Vec<ZipCodeCount>> {
        let store = ctx.data::<Store>()?;
        fetch_top_customer_zip_codes(store, &seller_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// A seller's 3 best-selling products, counted in order-items.
    async fn top_products_by_seller(
        &self,
        ctx: &Context<'_>,
        seller_id: String,
    ) -> Result<Vec<ProductSales>> {
        let store = ctx.data::<Store>()?;
        fetch_top_products_by_seller(store, &seller_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// Products on a customer's 3 most recent order-items, newest first.
    async fn last_three_products_by_customer(
        &self,
        ctx: &Context<'_>,
        customer_id: String,
    ) -> Result<Vec<CustomerProduct>> {
        let store = ctx.data::<Store>()?;
        fetch_last_products_by_customer(store, &customer_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// The 5 sellers with the most order-items in a category.
    async fn top_sellers_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
    ) -> Result<Vec<SellerSales>> {
        let store = ctx.data::<Store>()?;
        fetch_top_sellers_by_category(store, &category)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// Look up a customer by id.
    async fn customer(&self, ctx: &Context<'_>, customer_id: String) -> Result<Option<Customer>> {
        let store = ctx.data::<Store>()?;
        fetch_customer(store, &customer_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// Look up a seller by id.
    async fn seller(&self, ctx: &Context<'_>, seller_id: String) -> Result<Option<Seller>> {
        let store = ctx.data::<Store>()?;
        fetch_seller(store, &seller_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// Look up a product by id.
    async fn product(&self, ctx: &Context<'_>, product_id: String) -> Result<Option<Product>> {
        let store = ctx.data::<Store>()?;
        fetch_product(store, &product_id)
            .await
            .map_err(GatewayError::into_graphql)
    }

    /// Look up an order by id.
    async fn order(&self, ctx: &Context<'_>, order_id: String) -> Result<Option<Order>> {
        let store = ctx.data::<Store>()?;
        fetch_order(store, &order_id)
            .await
            .map_err(GatewayError::into_graphql)
    }
}

// =============================================================================
// Store Calls
// =============================================================================

async fn fetch_orders_between_dates(
    store: &Store,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<Order>, GatewayError> {
    let range = DateRange::parse(start_date, end_date)?;
    let orders = store
        .analytics()
        .orders_between_dates(range)
        .await
        .map_err(GatewayError::store("fetch orders"))?;
    Ok(orders.into_iter().map(Order).collect())
}

async fn fetch_top_customer_zip_codes(
    store: &Store,
    seller_id: &str,
) -> Result<Vec<ZipCodeCount>, GatewayError> {
    let seller_id = SellerId::parse(seller_id)?;
    let rows = store
        .analytics()
        .top_customer_zip_codes(&seller_id)
        .await
        .map_err(GatewayError::store("fetch top zip codes"))?;
    Ok(rows.into_iter().map(ZipCodeCount::from).collect())
}

async fn fetch_top_products_by_seller(
    store: &Store,
    seller_id: &str,
) -> Result<Vec<ProductSales>, GatewayError> {
    let seller_id = SellerId::parse(seller_id)?;
    let rows = store
        .analytics()
        .top_products_by_seller(&seller_id)
        .await
        .map_err(GatewayError::store("fetch top products"))?;
    Ok(rows.into_iter().map(ProductSales::from).collect())
}

async fn fetch_last_products_by_customer(
    store: &Store,
    customer_id: &str,
) -> Result<Vec<CustomerProduct>, GatewayError> {
    let customer_id = CustomerId::parse(customer_id)?;
    let rows = store
        .analytics()
        .last_products_by_customer(&customer_id)
        .await
        .map_err(GatewayError::store("fetch last products"))?;
    Ok(rows.into_iter().map(CustomerProduct::from).collect())
}

async fn fetch_top_sellers_by_category(
    store: &Store,
    category: &str,
) -> Result<Vec<SellerSales>, GatewayError> {
    let category = Category::parse(category)?;
    let rows = store
        .analytics()
        .top_sellers_by_category(&category)
        .await
        .map_err(GatewayError::store("fetch top sellers"))?;
    Ok(rows.into_iter().map(SellerSales::from).collect())
}

async fn fetch_customer(store: &Store, customer_id: &str) -> Result<Option<Customer>, GatewayError> {
    let customer_id = CustomerId::parse(customer_id)?;
    let customer = store
        .customers()
        .get_by_id(&customer_id)
        .await
        .map_err(GatewayError::store("fetch customer"))?;
    Ok(customer.map(Customer::from))
}

async fn fetch_seller(store: &Store, seller_id: &str) -> Result<Option<Seller>, GatewayError> {
    let seller_id = SellerId::parse(seller_id)?;
    let seller = store
        .sellers()
        .get_by_id(&seller_id)
        .await
        .map_err(GatewayError::store("fetch seller"))?;
    Ok(seller.map(Seller::from))
}

async fn fetch_product(store: &Store, product_id: &str) -> Result<Option<Product>, GatewayError> {
    let product_id = ProductId::parse(product_id)?;
    let product = store
        .products()
        .get_by_id(&product_id)
        .await
        .map_err(GatewayError::store("fetch product"))?;
    Ok(product.map(Product))
}

async fn fetch_order(store: &Store, order_id: &str) -> Result<Option<Order>, GatewayError> {
    let order_id = OrderId::parse(order_id)?;
    let order = store
        .orders()
        .get_by_id(&order_id)
        .await
        .map_err(GatewayError::store("fetch order"))?;
    Ok(order.map(Order))
}
