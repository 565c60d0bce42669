use async_trait::async_trait;

use crate::error::RegistrationResult;
use crate::models::{NewRegistration, Registration};

/// Repository trait for registration persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Store one registration and return the identifier the store assigned
    async fn insert(&self, registration: NewRegistration) -> RegistrationResult<String>;

    /// Every stored registration, in whatever order the store yields them
    async fn find_all(&self) -> RegistrationResult<Vec<Registration>>;
}
