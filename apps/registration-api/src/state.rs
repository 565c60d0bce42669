//! Application state management.
//!
//! The state is cloned into every handler (inexpensive Arc clones) and holds:
//! - Configuration
//! - The MongoDB connection manager, which connects on first use

use database::mongodb::MongoConnectionManager;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Lazily-connected MongoDB link shared by every request
    pub connections: MongoConnectionManager,
}

impl AppState {
    /// Build the state. Does not touch the network.
    pub fn new(config: Config) -> Self {
        let connections = MongoConnectionManager::new(config.mongodb.clone());
        Self {
            config,
            connections,
        }
    }
}
