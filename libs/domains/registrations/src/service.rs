//! Registration Service - Business logic layer

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;

use crate::error::RegistrationResult;
use crate::models::{NewRegistration, Registration};
use crate::repository::RegistrationRepository;

/// Registration service: stamps submissions and delegates to the repository.
pub struct RegistrationService<R: RegistrationRepository> {
    repository: Arc<R>,
}

impl<R: RegistrationRepository> RegistrationService<R> {
    /// Create a new RegistrationService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store a submission with the current server time under `submittedAt`.
    #[instrument(skip(self, registration), fields(field_count = registration.fields().len()))]
    pub async fn register(&self, registration: Registration) -> RegistrationResult<String> {
        let stamped = NewRegistration::stamp(registration, Utc::now());
        self.repository.insert(stamped).await
    }

    /// List every stored registration
    #[instrument(skip(self))]
    pub async fn list(&self) -> RegistrationResult<Vec<Registration>> {
        self.repository.find_all().await
    }
}

impl<R: RegistrationRepository> Clone for RegistrationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
