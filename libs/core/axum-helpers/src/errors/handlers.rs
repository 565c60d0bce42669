use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Router fallback: a JSON 404 naming the route that was asked for.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, path = uri.path(), "No route matched");

    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: format!("No route for {} {}", method, uri.path()),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
