//! CORS middleware configuration
//!
//! Browsers may call the API from any origin unless an allow-list is
//! configured. Methods and headers are fixed.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
    Method::OPTIONS,
];

/// Create CORS layer accepting any origin
pub fn cors_layer() -> CorsLayer {
    base_layer().allow_origin(Any)
}

/// Create CORS layer restricted to the given origins
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer_restricted(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    base_layer().allow_origin(AllowOrigin::list(origins))
}

/// Build the CORS layer described by the configuration
pub fn cors_from_config(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        cors_layer()
    } else {
        cors_layer_restricted(&config.allowed_origins)
    }
}

fn base_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
