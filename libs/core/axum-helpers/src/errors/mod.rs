//! Error response shapes shared by every router.

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned for requests that never reach a domain handler.
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "No route for GET /api/unknown"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}
