//! Database library providing MongoDB connectivity
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, MongoConnectionManager};
//! use core_config::FromEnv;
//!
//! let manager = MongoConnectionManager::new(MongoConfig::from_env()?);
//!
//! // First use performs the handshake, later calls reuse it
//! let collection = manager.collection().await?;
//! collection.insert_one(doc! { "hello": "world" }).await?;
//!
//! manager.close().await;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
