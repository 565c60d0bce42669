use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc},
    options::ClientOptions,
};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("MongoDB connection string is not configured (set MONGODB_URI)")]
    MissingUri,

    #[error("MongoDB connection has been closed")]
    Closed,
}

/// A live link to the configured database and collection.
///
/// All three members are cheap handles onto the same driver pool.
#[derive(Clone, Debug)]
pub struct ConnectionHandle {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl ConnectionHandle {
    pub(crate) fn new(client: Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        Self {
            client,
            database,
            collection,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

/// Connect using a MongoConfig and verify the server answers a `ping`.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("mongodb://localhost:27017").with_database("mydb");
/// let handle = connect_from_config(&config).await?;
/// let docs = handle.collection().count_documents(doc! {}).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<ConnectionHandle, MongoError> {
    let url = config.url().ok_or(MongoError::MissingUri)?;

    info!(
        url = %config.redacted_url(),
        database = config.database(),
        collection = config.collection(),
        "Attempting to connect to MongoDB"
    );

    let mut options = ClientOptions::parse(url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    let database = client.database(config.database());

    // The driver connects lazily; ping to surface bad hosts or credentials now.
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(ConnectionHandle::new(
        client,
        config.database(),
        config.collection(),
    ))
}
