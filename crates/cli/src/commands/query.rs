//! Run one aggregation and print its rows as JSON.
//!
//! # Usage
//!
//! ```bash
//! ra-cli orders-between-dates --start 2018-01-01 --end 2018-01-31
//! ra-cli top-zip-codes --seller-id 3442f8959a84dea7ee197c632cb2df15
//! ra-cli top-products --seller-id 3442f8959a84dea7ee197c632cb2df15
//! ra-cli last-products --customer-id 06b8999e2fba1a1fbc88172c00ba8bc7
//! ra-cli top-sellers --category perfumaria
//! ```

use retail_analytics_api::db::Store;
use retail_analytics_core::{Category, CustomerId, DateRange, SellerId};
use serde::Serialize;

use super::{CliError, open_store};

/// Which aggregation to run, with its already-split arguments.
#[derive(Debug, Clone)]
pub enum Aggregation {
    OrdersBetweenDates { start: String, end: String },
    TopZipCodes { seller_id: String },
    TopProducts { seller_id: String },
    LastProducts { customer_id: String },
    TopSellers { category: String },
}

/// Validate arguments, run the aggregation, print pretty JSON.
///
/// Arguments are validated before connecting, so a bad date never opens a
/// connection.
pub async fn run(aggregation: Aggregation) -> Result<(), CliError> {
    let request = Request::parse(aggregation)?;
    let store = open_store().await?;
    let output = request.execute(&store).await;
    store.close().await;

    let output = output?;
    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

/// An aggregation with validated arguments.
#[derive(Debug)]
enum Request {
    OrdersBetweenDates(DateRange),
    TopZipCodes(SellerId),
    TopProducts(SellerId),
    LastProducts(CustomerId),
    TopSellers(Category),
}

impl Request {
    fn parse(aggregation: Aggregation) -> Result<Self, CliError> {
        Ok(match aggregation {
            Aggregation::OrdersBetweenDates { start, end } => {
                Self::OrdersBetweenDates(DateRange::parse(&start, &end)?)
            }
            Aggregation::TopZipCodes { seller_id } => Self::TopZipCodes(SellerId::parse(&seller_id)?),
            Aggregation::TopProducts { seller_id } => Self::TopProducts(SellerId::parse(&seller_id)?),
            Aggregation::LastProducts { customer_id } => {
                Self::LastProducts(CustomerId::parse(&customer_id)?)
            }
            Aggregation::TopSellers { category } => Self::TopSellers(Category::parse(&category)?),
        })
    }

    async fn execute(&self, store: &Store) -> Result<String, CliError> {
        let analytics = store.analytics();
        match self {
            Self::OrdersBetweenDates(range) => to_json(&analytics.orders_between_dates(*range).await?),
            Self::TopZipCodes(seller_id) => {
                to_json(&analytics.top_customer_zip_codes(seller_id).await?)
            }
            Self::TopProducts(seller_id) => {
                to_json(&analytics.top_products_by_seller(seller_id).await?)
            }
            Self::LastProducts(customer_id) => {
                to_json(&analytics.last_products_by_customer(customer_id).await?)
            }
            Self::TopSellers(category) => to_json(&analytics.top_sellers_by_category(category).await?),
        }
    }
}

fn to_json<T: Serialize>(rows: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
