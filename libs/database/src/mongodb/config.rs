#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_or_default, env_parse_or};

/// Database used when `DATABASE_NAME` is not set.
pub const DEFAULT_DATABASE: &str = "bit-hackathon";

/// Collection used when `COLLECTION_NAME` is not set.
pub const DEFAULT_COLLECTION: &str = "registrations";

/// MongoDB connection settings.
///
/// The connection string is optional at startup: the process boots without it and
/// only the first data access fails. Database and collection fall back to fixed names.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017")
///     .with_database("events")
///     .with_collection("signups");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: Option<String>,

    /// Database name to use
    pub database: String,

    /// Collection the application reads and writes
    pub collection: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config for `url` with default database, collection and pool settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Override both driver timeouts, in seconds.
    pub fn with_timeouts(mut self, connect_secs: u64, server_selection_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.server_selection_timeout_secs = server_selection_secs;
        self
    }

    /// The connection URL, if configured
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the collection name
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The connection URL with any password replaced, for logging.
    pub fn redacted_url(&self) -> String {
        match self.url.as_deref() {
            Some(url) => redact_credentials(url),
            None => "<unset>".to_string(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: None,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => {
            let user = rest[..at].split(':').next().unwrap_or_default();
            format!("{}://{}:***@{}", scheme, user, &rest[at + 1..])
        }
        None => url.to_string(),
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URI`, `MONGODB_URL` or `MONGO_URL` (optional) - connection string
/// - `DATABASE_NAME` (optional, default: `bit-hackathon`)
/// - `COLLECTION_NAME` (optional, default: `registrations`)
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100) - Max pool connections
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5) - Min pool connections
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_first_of(&["MONGODB_URI", "MONGODB_URL", "MONGO_URL"]),
            database: env_or_default("DATABASE_NAME", DEFAULT_DATABASE),
            collection: env_or_default("COLLECTION_NAME", DEFAULT_COLLECTION),
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}
