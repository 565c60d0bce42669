//! Registrations API routes
//!
//! Wires the registrations domain to the shared MongoDB connection manager.

use axum::Router;
use domain_registrations::{MongoRegistrationRepository, RegistrationService, handlers};

use crate::state::AppState;

/// Create registrations router
pub fn router(state: &AppState) -> Router {
    let repository = MongoRegistrationRepository::new(state.connections.clone());
    let service = RegistrationService::new(repository);

    handlers::router(service)
}
