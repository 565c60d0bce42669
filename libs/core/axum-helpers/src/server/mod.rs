//! Server infrastructure module.
//!
//! This module provides:
//! - Router composition with OpenAPI documentation and cross-cutting layers
//! - Serving with graceful shutdown and post-shutdown cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_router, serve_with_cleanup};
//!
//! let router = create_router::<ApiDoc>(api_routes, cors);
//! serve_with_cleanup(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_router, serve_until_shutdown, serve_with_cleanup};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
