use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::mongodb::MongoError;
use thiserror::Error;

use crate::models::{FailureEnvelope, LIST_FAILURE_MESSAGE, REGISTRATION_FAILURE_MESSAGE};

/// Failures of the registration store. Each carries the underlying message text.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Store unreachable or misconfigured
    #[error("{0}")]
    Connection(String),

    /// Insert failed
    #[error("{0}")]
    Write(String),

    /// Query failed
    #[error("{0}")]
    Read(String),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationError::Connection(_) => "connection",
            RegistrationError::Write(_) => "write",
            RegistrationError::Read(_) => "read",
        }
    }
}

impl From<MongoError> for RegistrationError {
    fn from(err: MongoError) -> Self {
        RegistrationError::Connection(err.to_string())
    }
}

/// A [`RegistrationError`] tied to the operation that hit it.
///
/// Renders as HTTP 500 with `{success: false, message, error}`.
#[derive(Debug)]
pub struct RegistrationFailure {
    message: &'static str,
    source: RegistrationError,
}

impl RegistrationFailure {
    /// Failure while creating a registration
    pub fn create(source: RegistrationError) -> Self {
        Self {
            message: REGISTRATION_FAILURE_MESSAGE,
            source,
        }
    }

    /// Failure while listing registrations
    pub fn list(source: RegistrationError) -> Self {
        Self {
            message: LIST_FAILURE_MESSAGE,
            source,
        }
    }

    pub fn error(&self) -> &RegistrationError {
        &self.source
    }
}

impl IntoResponse for RegistrationFailure {
    fn into_response(self) -> Response {
        tracing::error!(
            kind = self.source.kind(),
            error = %self.source,
            "{}",
            self.message
        );

        let body = FailureEnvelope {
            success: false,
            message: self.message.to_string(),
            error: self.source.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
