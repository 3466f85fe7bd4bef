use tracing::info;

use crate::config::{optional_var, parsed_var, required_var, ConfigError};

/// Connection settings for the content database.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    /// Only applied when both are set; otherwise the URI carries auth.
    pub username: Option<String>,
    pub password: Option<String>,
    pub max_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub app_name: String,
}

impl MongoConfig {
    /// `MONGO_URI` and `MONGO_DATABASE` are required; the rest have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = MongoConfig::default();
        let config = MongoConfig {
            uri: required_var("MONGO_URI")?,
            database: required_var("MONGO_DATABASE")?,
            username: optional_var("MONGO_USERNAME"),
            password: optional_var("MONGO_PASSWORD"),
            max_pool_size: parsed_var("MONGO_POOL_SIZE", defaults.max_pool_size)?,
            connect_timeout_secs: parsed_var("MONGO_CONNECTION_TIMEOUT", defaults.connect_timeout_secs)?,
            app_name: optional_var("MONGO_APP_NAME").unwrap_or(defaults.app_name),
        };

        config.validate()?;
        info!(database = %config.database, "MongoDB configuration loaded");
        Ok(config)
    }

    pub fn from_test_env() -> Self {
        MongoConfig {
            database: "showroom_test".to_string(),
            username: Some("testuser".to_string()),
            password: Some("testpass".to_string()),
            max_pool_size: 2,
            connect_timeout_secs: 2,
            ..MongoConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.uri.starts_with("mongodb://") && !self.uri.starts_with("mongodb+srv://") {
            return Err(ConfigError::ValidationError(
                "MONGO_URI must start with mongodb:// or mongodb+srv://".to_string(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::ValidationError("MONGO_DATABASE cannot be empty".to_string()));
        }
        if self.max_pool_size == 0 || self.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "MongoDB pool size and connection timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Username/password pair, only when both are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "showroom".to_string(),
            username: None,
            password: None,
            max_pool_size: 10,
            connect_timeout_secs: 5,
            app_name: "showroom-backend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MongoConfig::default();
        assert_eq!(config.database, "showroom");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_mongo_uri() {
        let mut config = MongoConfig::from_test_env();
        config.uri = "postgres://localhost".to_string();
        assert!(config.validate().is_err());

        config.uri = "mongodb+srv://cluster.example.net".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_database() {
        let mut config = MongoConfig::from_test_env();
        config.database = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_pool_or_timeout() {
        let mut config = MongoConfig::from_test_env();
        config.max_pool_size = 0;
        assert!(config.validate().is_err());

        let mut config = MongoConfig::from_test_env();
        config.connect_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_require_both_parts() {
        let mut config = MongoConfig::from_test_env();
        assert_eq!(config.credentials(), Some(("testuser", "testpass")));
        config.password = None;
        assert!(config.credentials().is_none());
    }
}
