//! Registrations Domain
//!
//! Stores schema-less event-registration submissions in MongoDB and lists them back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Stamps submittedAt
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Registration record, envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{MongoConfig, MongoConnectionManager};
//! use domain_registrations::{handlers, MongoRegistrationRepository, RegistrationService};
//!
//! let connections = MongoConnectionManager::new(MongoConfig::new("mongodb://localhost:27017"));
//! let repository = MongoRegistrationRepository::new(connections);
//! let service = RegistrationService::new(repository);
//!
//! // Serves POST /register and GET /registrations
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{RegistrationError, RegistrationFailure, RegistrationResult};
pub use handlers::ApiDoc;
pub use models::{
    FailureEnvelope, NewRegistration, Registration, RegistrationCreated, RegistrationList,
    SUBMITTED_AT,
};
pub use self::mongodb::MongoRegistrationRepository;
pub use repository::RegistrationRepository;
pub use service::RegistrationService;
