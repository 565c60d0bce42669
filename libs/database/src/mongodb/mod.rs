//! MongoDB database connector and utilities
//!
//! Provides configuration, the connect handshake, a lazily-connecting
//! connection manager and health checks.

mod config;
mod connector;
mod health;
mod manager;

pub use config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, MongoConfig};
pub use connector::{ConnectionHandle, MongoError, connect_from_config};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use manager::{ConnectionState, MongoConnectionManager};

// Re-export MongoDB types for convenience
pub use mongodb::bson;
pub use mongodb::{Client, Collection, Database};
