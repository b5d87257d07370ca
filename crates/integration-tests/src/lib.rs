//! Integration test support for Retail Analytics.
//!
//! # Running Tests
//!
//! ```bash
//! # Fixture database tests (schema `retail` is dropped and recreated)
//! ANALYTICS_TEST_DATABASE_URL=postgres://localhost/retail_analytics_test \
//!     cargo test -p retail-analytics-integration-tests -- --ignored
//!
//! # Live server tests
//! ANALYTICS_BASE_URL=http://localhost:4000 \
//!     cargo test -p retail-analytics-integration-tests --test gateway_http -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `analytics` - Aggregation queries against the fixture data
//! - `lookups` - Keyed entity reads against the fixture data
//! - `gateway` - GraphQL documents executed in-process over the fixture store
//! - `gateway_http` - HTTP tests against a running gateway
//!
//! Never point `ANALYTICS_TEST_DATABASE_URL` at a database you care about.

use std::time::Duration;

use retail_analytics_api::db::Store;
use secrecy::SecretString;
use sqlx::PgPool;
use tokio::sync::OnceCell;

/// DDL for the `retail` schema.
pub const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

/// Fixture rows.
pub const DATA_SQL: &str = include_str!("../fixtures/data.sql");

/// Per-call timeout used by fixture stores.
pub const TEST_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

static FIXTURE_LOADED: OnceCell<()> = OnceCell::const_new();

/// Connection string of the throwaway fixture database.
///
/// # Panics
///
/// Panics if `ANALYTICS_TEST_DATABASE_URL` is not set.
#[must_use]
pub fn test_database_url() -> String {
    std::env::var("ANALYTICS_TEST_DATABASE_URL")
        .expect("ANALYTICS_TEST_DATABASE_URL must point at a throwaway database")
}

/// Base URL of a running gateway (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("ANALYTICS_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Recreate the `retail` schema and load the fixture rows.
///
/// # Errors
///
/// Returns `sqlx::Error` if either script fails.
pub async fn load_fixture(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    sqlx::raw_sql(DATA_SQL).execute(pool).await?;
    Ok(())
}

/// Open a store over the fixture database, loading the fixture once per test
/// binary.
///
/// # Panics
///
/// Panics if the database is unreachable or the fixture fails to load.
pub async fn fixture_store() -> Store {
    let url = SecretString::from(test_database_url());

    FIXTURE_LOADED
        .get_or_init(|| async {
            let pool = retail_analytics_api::db::create_pool(&url, 1)
                .await
                .expect("Failed to connect to fixture database");
            load_fixture(&pool).await.expect("Failed to load fixture");
            pool.close().await;
        })
        .await;

    let pool = retail_analytics_api::db::create_pool(&url, 2)
        .await
        .expect("Failed to connect to fixture database");
    Store::new(pool, TEST_QUERY_TIMEOUT)
}
