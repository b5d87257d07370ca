//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::Store;
use crate::graphql::{AnalyticsSchema, build_schema};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the store, the executable schema and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Store,
    schema: AnalyticsSchema,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Gateway configuration
    /// * `store` - Open store handle; the schema gets its own clone
    #[must_use]
    pub fn new(config: ApiConfig, store: Store) -> Self {
        let schema = build_schema(store.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
            }),
        }
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the store handle.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &AnalyticsSchema {
        &self.inner.schema
    }
}
