use std::env;
use tracing::{debug, warn};

use crate::config::ConfigError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer; empty means any origin.
    pub cors_origins: Vec<String>,
    /// Adds the `Secure` attribute to the session cookie.
    pub cookie_secure: bool,
    pub maintenance_cache_ttl_secs: u64,
    /// Fallback WhatsApp number when the stored settings carry none.
    pub whatsapp_number: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        debug!("CORS origins: {:?}", cors_origins);

        let cookie_secure = env::var("COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let maintenance_cache_ttl_secs = env::var("MAINTENANCE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| {
                warn!("MAINTENANCE_CACHE_TTL_SECS not set, using default: 60");
                "60".to_string()
            })
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue("Invalid MAINTENANCE_CACHE_TTL_SECS value".to_string()))?;

        let whatsapp_number = env::var("WHATSAPP_NUMBER").ok().filter(|v| !v.trim().is_empty());

        let config = AppConfig {
            host,
            port,
            cors_origins,
            cookie_secure,
            maintenance_cache_ttl_secs,
            whatsapp_number,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError("APP_HOST cannot be empty".to_string()));
        }
        if self.maintenance_cache_ttl_secs == 0 {
            return Err(ConfigError::ValidationError(
                "MAINTENANCE_CACHE_TTL_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            cookie_secure: false,
            maintenance_cache_ttl_secs: 60,
            whatsapp_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.maintenance_cache_ttl_secs, 60);
        assert!(!config.cookie_secure);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ttl() {
        let mut config = AppConfig::default();
        config.maintenance_cache_ttl_secs = 0;
        assert!(config.validate().is_err());
    }
}
