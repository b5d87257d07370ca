//! Cross-origin policy for the gateway.
//!
//! With no configured origin any site may call `/graphql` (the UI is usually
//! served from the same origin anyway). With `ANALYTICS_CORS_ORIGIN` set, only
//! that origin is allowed, for `GET`/`POST` with a JSON body. Other origins
//! get no `access-control-allow-origin` header at all.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer for an optional allowed origin.
///
/// `origin` is expected to be already validated by
/// [`crate::config::ApiConfig::from_env`].
#[must_use]
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };

    let allow_origin = match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::list([value]),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Unusable CORS origin, denying cross-origin requests");
            AllowOrigin::list([])
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
