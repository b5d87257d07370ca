//! Store connectivity check.
//!
//! # Environment Variables
//!
//! - `ANALYTICS_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//! - `ANALYTICS_QUERY_TIMEOUT_SECS` - Bound on the check query

use super::{CliError, open_store};

/// Connect and run `SELECT 1`.
pub async fn run() -> Result<(), CliError> {
    let store = open_store().await?;
    store.ping().await?;
    store.close().await;

    tracing::info!("Store is reachable");
    Ok(())
}
