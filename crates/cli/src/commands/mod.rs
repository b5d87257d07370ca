//! Subcommand implementations.

pub mod ping;
pub mod query;
pub mod schema;

use retail_analytics_api::config::{ApiConfig, ConfigError};
use retail_analytics_api::db::{self, RepositoryError, Store};
use retail_analytics_core::ArgumentError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connecting to the store failed.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// A store call failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// A command argument was rejected.
    #[error("Invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Open a single-connection store using the gateway's environment.
async fn open_store() -> Result<Store, CliError> {
    let config = ApiConfig::from_env()?;
    tracing::info!("Connecting to store...");
    let pool = db::create_pool(&config.database_url, 1).await?;
    Ok(Store::new(pool, config.query_timeout))
}
