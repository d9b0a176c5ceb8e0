use log::warn;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub service_name: String,
}

impl AppConfig {
    /// Read configuration from the process environment. Call after `dotenv()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, applying defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "localhost".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        let mongodb_uri =
            lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string());
        let database_name = lookup("DATABASE_NAME").unwrap_or_else(|| "devconnector".to_string());

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET is not set, falling back to the development secret");
            "secret".to_string()
        });

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "posts-api".to_string());

        Ok(AppConfig {
            host,
            port,
            mongodb_uri,
            database_name,
            jwt_secret,
            service_name,
        })
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        AppConfig {
            host: "localhost".into(),
            port: 0,
            mongodb_uri: String::new(),
            database_name: "devconnector_test".into(),
            jwt_secret: "test-secret".into(),
            service_name: "posts-api-test".into(),
        }
    }
}
