use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

/// CORS layer for browser clients.
///
/// `TASKTRACK_CORS_ORIGINS` restricts the allowed origins; unset (or an
/// unparsable list) means wildcard, suitable for development.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let wildcard = || {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods(Any)
    };

    match &config.cors_allowed_origins {
        Some(origins_str) => {
            let origins: Vec<HeaderValue> = origins_str
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                wildcard()
            } else {
                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_headers(Any)
                    .allow_methods(Any)
            }
        }
        None => wildcard(),
    }
}
