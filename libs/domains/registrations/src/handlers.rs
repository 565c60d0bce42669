use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RegistrationFailure;
use crate::models::{FailureEnvelope, Registration, RegistrationCreated, RegistrationList};
use crate::repository::RegistrationRepository;
use crate::service::RegistrationService;

/// OpenAPI documentation for Registrations API
#[derive(OpenApi)]
#[openapi(
    paths(create_registration, list_registrations),
    components(schemas(Registration, RegistrationCreated, RegistrationList, FailureEnvelope)),
    tags(
        (name = "Registrations", description = "Event registration submissions (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the registrations router with all HTTP endpoints
pub fn router<R: RegistrationRepository + 'static>(service: RegistrationService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/register", post(create_registration))
        .route("/registrations", get(list_registrations))
        .with_state(shared_service)
}

/// Store a registration submission
#[utoipa::path(
    post,
    path = "/register",
    tag = "Registrations",
    request_body = Registration,
    responses(
        (status = 201, description = "Registration stored", body = RegistrationCreated),
        (status = 500, description = "Store unavailable or insert failed", body = FailureEnvelope)
    )
)]
async fn create_registration<R: RegistrationRepository>(
    State(service): State<Arc<RegistrationService<R>>>,
    Json(registration): Json<Registration>,
) -> Result<impl IntoResponse, RegistrationFailure> {
    let id = service
        .register(registration)
        .await
        .map_err(RegistrationFailure::create)?;

    Ok((StatusCode::CREATED, Json(RegistrationCreated::new(id))))
}

/// List every stored registration
#[utoipa::path(
    get,
    path = "/registrations",
    tag = "Registrations",
    responses(
        (status = 200, description = "All registrations", body = RegistrationList),
        (status = 500, description = "Store unavailable or query failed", body = FailureEnvelope)
    )
)]
async fn list_registrations<R: RegistrationRepository>(
    State(service): State<Arc<RegistrationService<R>>>,
) -> Result<Json<RegistrationList>, RegistrationFailure> {
    let registrations = service.list().await.map_err(RegistrationFailure::list)?;
    Ok(Json(RegistrationList::new(registrations)))
}
