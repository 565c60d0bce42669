use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Field the server stamps on every stored registration.
pub const SUBMITTED_AT: &str = "submittedAt";

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";
pub const REGISTRATION_FAILURE_MESSAGE: &str = "Registration failed";
pub const LIST_FAILURE_MESSAGE: &str = "Failed to fetch registrations";

/// A registration submission: whatever JSON object the caller sent.
///
/// When read back it also carries the store-assigned `_id` and `submittedAt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Registration(pub Map<String, Value>);

impl Registration {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Registration {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A registration ready to be written, with its server-assigned timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    /// Caller fields, minus any `submittedAt` they tried to set
    pub fields: Map<String, Value>,
    pub submitted_at: DateTime<Utc>,
}

impl NewRegistration {
    /// Attach `submitted_at`. A caller-supplied `submittedAt` is dropped.
    pub fn stamp(registration: Registration, submitted_at: DateTime<Utc>) -> Self {
        let mut fields = registration.into_fields();
        fields.remove(SUBMITTED_AT);
        Self {
            fields,
            submitted_at,
        }
    }
}

/// 201 body for a stored registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationCreated {
    pub success: bool,
    pub message: String,
    /// Identifier assigned by the store
    pub id: String,
}

impl RegistrationCreated {
    pub fn new(id: String) -> Self {
        Self {
            success: true,
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
            id,
        }
    }
}

/// 200 body listing every stored registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationList {
    pub success: bool,
    /// Always `data.len()`
    pub count: usize,
    pub data: Vec<Registration>,
}

impl RegistrationList {
    pub fn new(data: Vec<Registration>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// 500 body for a failed store call
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureEnvelope {
    pub success: bool,
    pub message: String,
    /// Message text of the underlying error
    pub error: String,
}
