use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer restricted to `allowed_origins`.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The listed origins
/// - Common HTTP methods (GET, POST, PUT, DELETE, PATCH, OPTIONS)
/// - Content-Type, Authorization and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer: any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Pick the CORS policy for a comma-separated origin list.
///
/// An empty list, or one that contains `*`, yields the permissive layer.
///
/// # Errors
/// Returns the offending entry if an origin is not a valid header value.
pub fn cors_layer_from_origins(origins: &str) -> Result<CorsLayer, String> {
    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(create_permissive_cors_layer());
    }

    let parsed = entries
        .into_iter()
        .map(|s| s.parse::<HeaderValue>().map_err(|_| s.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(create_cors_layer(parsed))
}
