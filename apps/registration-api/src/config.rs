use core_config::{FromEnv, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Comma-separated allowed origins; `*` (the default) allows any origin
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            mongodb: MongoConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            cors_allowed_origins: env_or_default("CORS_ALLOWED_ORIGIN", "*"),
        })
    }

    /// Development defaults around the given store settings
    pub fn new(mongodb: MongoConfig) -> Self {
        Self {
            mongodb,
            server: ServerConfig::default(),
            environment: Environment::Development,
            cors_allowed_origins: "*".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "MONGODB_URI",
                "MONGODB_URL",
                "MONGO_URL",
                "DATABASE_NAME",
                "COLLECTION_NAME",
                "PORT",
                "APP_ENV",
                "NODE_ENV",
                "CORS_ALLOWED_ORIGIN",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.url(), None);
                assert_eq!(config.mongodb.database(), "bit-hackathon");
                assert_eq!(config.mongodb.collection(), "registrations");
                assert_eq!(config.server.port, 3001);
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.cors_allowed_origins, "*");
            },
        );
    }

    #[test]
    fn test_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_URI", Some("mongodb+srv://u:p@cluster.example.net")),
                ("DATABASE_NAME", Some("hackathon-2026")),
                ("COLLECTION_NAME", Some("signups")),
                ("PORT", Some("8080")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.url(), Some("mongodb+srv://u:p@cluster.example.net"));
                assert_eq!(config.mongodb.database(), "hackathon-2026");
                assert_eq!(config.mongodb.collection(), "signups");
                assert_eq!(config.server.port, 8080);
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_config_from_env_rejects_bad_port() {
        temp_env::with_var("PORT", Some("three-thousand"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
