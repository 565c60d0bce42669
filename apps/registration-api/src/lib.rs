//! Event registration API.
//!
//! The handler graph is built by [`build_app`] and reached through one of two
//! composition roots, picked once at startup from the deployment mode:
//!
//! - [`serve`] binds a listener, serves until SIGINT/SIGTERM, then closes the
//!   MongoDB connection.
//! - [`hosted`] returns the graph for an external host to drive and never binds.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::{cors_layer_from_origins, create_router, serve_with_cleanup};
use eyre::WrapErr;
use std::time::Duration;
use tracing::info;

use config::Config;
use state::AppState;

/// Upper bound on post-shutdown cleanup.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Compose API routes, OpenAPI docs and middleware over `state`.
pub fn build_app(state: &AppState) -> eyre::Result<Router> {
    let cors = cors_layer_from_origins(&state.config.cors_allowed_origins)
        .map_err(|origin| eyre::eyre!("Invalid CORS_ALLOWED_ORIGIN entry: {origin}"))?;

    Ok(create_router::<openapi::ApiDoc>(api::routes(state), cors))
}

/// Composition root for an external host: the router, with no listener.
///
/// Embedding hosts call this directly and drive the returned router themselves.
pub fn hosted(config: Config) -> eyre::Result<Router> {
    build_app(&AppState::new(config))
}

/// Composition root that owns the socket.
pub async fn serve(config: Config) -> eyre::Result<()> {
    let state = AppState::new(config);
    let app = build_app(&state)?;

    info!(
        mongodb = %state.config.mongodb.redacted_url(),
        database = state.config.mongodb.database(),
        collection = state.config.mongodb.collection(),
        "MongoDB will connect on first request"
    );

    let connections = state.connections.clone();
    serve_with_cleanup(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing MongoDB connection");
        connections.close().await;
    })
    .await
    .wrap_err("Server error")?;

    Ok(())
}
