//! Geolocation repository for database operations.
//!
//! Customers and sellers reference geolocation by postal code only; there is no
//! foreign key, so a code may be missing from this table.

use std::time::Duration;

use retail_analytics_core::{Geolocation, ZipCode};
use sqlx::PgPool;
use tracing::instrument;

use super::{RepositoryError, with_timeout};

/// Repository for geolocation lookups.
pub struct GeolocationRepository<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> GeolocationRepository<'a> {
    /// Create a new geolocation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get the location for a postal code.
    ///
    /// If the source data holds more than one row for the code, the first by
    /// city name wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_zip_code(
        &self,
        zip_code: &ZipCode,
    ) -> Result<Option<Geolocation>, RepositoryError> {
        with_timeout(self.timeout, async {
            sqlx::query_as::<_, Geolocation>(
                r"
                SELECT zip_code, geolocation_city, geolocation_lat, geolocation_lng,
                       geolocation_state
                FROM retail.geolocation
                WHERE zip_code = $1
                ORDER BY geolocation_city NULLS LAST
                LIMIT 1
                ",
            )
            .bind(zip_code)
            .fetch_optional(self.pool)
            .await
            .map_err(RepositoryError::from)
        })
        .await
    }
}
