//! MongoDB implementation of RegistrationRepository

use async_trait::async_trait;
use database::mongodb::MongoConnectionManager;
use futures::TryStreamExt;
use mongodb::bson::{Bson, DateTime as BsonDateTime, Document, doc};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{NewRegistration, Registration, SUBMITTED_AT};
use crate::repository::RegistrationRepository;

/// MongoDB implementation of the RegistrationRepository
///
/// Connects through the shared [`MongoConnectionManager`] on first use.
#[derive(Clone)]
pub struct MongoRegistrationRepository {
    connections: MongoConnectionManager,
}

impl MongoRegistrationRepository {
    pub fn new(connections: MongoConnectionManager) -> Self {
        Self { connections }
    }

    /// Build the stored document: caller fields plus `submittedAt` as a BSON date.
    fn to_document(registration: &NewRegistration) -> Document {
        let mut document = json_to_document(&registration.fields);
        document.insert(
            SUBMITTED_AT,
            BsonDateTime::from_millis(registration.submitted_at.timestamp_millis()),
        );
        document
    }

    fn from_document(document: Document) -> Registration {
        Registration(document_to_json(document))
    }
}

fn json_to_document(fields: &Map<String, Value>) -> Document {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), json_to_bson(value)))
        .collect()
}

/// Integers wider than `i64` are stored as doubles; every JSON value has a BSON form.
fn json_to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Bson::Int64(i),
            (None, Some(f)) => Bson::Double(f),
            (None, None) => Bson::String(n.to_string()),
        },
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(json_to_bson).collect()),
        Value::Object(fields) => Bson::Document(json_to_document(fields)),
    }
}

/// Render a stored document as JSON: ids as hex, dates as RFC 3339.
fn document_to_json(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(formatted) => Value::String(formatted),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(document) => Value::Object(document_to_json(document)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

fn inserted_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.into_relaxed_extjson().to_string(),
    }
}

#[async_trait]
impl RegistrationRepository for MongoRegistrationRepository {
    #[instrument(skip(self, registration), fields(field_count = registration.fields.len()))]
    async fn insert(&self, registration: NewRegistration) -> RegistrationResult<String> {
        let collection = self.connections.collection().await?;

        let document = Self::to_document(&registration);

        let result = collection
            .insert_one(document)
            .await
            .map_err(|e| RegistrationError::Write(e.to_string()))?;

        let id = inserted_id_to_string(result.inserted_id);
        info!(registration_id = %id, "Registration stored");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RegistrationResult<Vec<Registration>> {
        let collection = self.connections.collection().await?;

        let cursor = collection
            .find(doc! {})
            .await
            .map_err(|e| RegistrationError::Read(e.to_string()))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| RegistrationError::Read(e.to_string()))?;

        Ok(documents.into_iter().map(Self::from_document).collect())
    }
}
