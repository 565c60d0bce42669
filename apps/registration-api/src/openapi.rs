//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::{HealthResponse, ReadyResponse};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        version = "0.1.0",
        description = "Stores event registration submissions in MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(crate::api::health::health_check, crate::api::health::readiness_check),
    components(schemas(HealthResponse, ReadyResponse)),
    nest(
        (path = "/api", api = domain_registrations::ApiDoc)
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Registrations", description = "Event registration submissions (MongoDB)")
    )
)]
pub struct ApiDoc;
