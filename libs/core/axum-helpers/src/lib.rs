//! # Axum Helpers
//!
//! Utilities for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Router composition, graceful shutdown
//! - **[`http`]**: CORS layers
//! - **[`errors`]**: Shared error response bodies
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_permissive_cors_layer, create_router, serve_with_cleanup};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router::<ApiDoc>(Router::new(), create_permissive_cors_layer());
//! serve_with_cleanup(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    OPENAPI_PATH, ShutdownCoordinator, create_router, serve_until_shutdown, serve_with_cleanup,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{cors_layer_from_origins, create_cors_layer, create_permissive_cors_layer};

// Re-export error types
pub use errors::ErrorResponse;
