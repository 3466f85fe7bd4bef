use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Session token configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,
    /// Session token lifetime in minutes
    pub expiration_minutes: i64,
    /// JWT issuer (optional)
    pub jwt_issuer: Option<String>,
    /// Name of the HTTP-only cookie carrying the token
    pub cookie_name: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JWT_SECRET: Secret key for signing JWT tokens (required, at least 32 chars)
    /// - JWT_EXPIRY_MINUTES: Session lifetime in minutes (defaults to 1440 = 1 day)
    /// - JWT_ISSUER: JWT issuer (optional)
    /// - SESSION_COOKIE_NAME: cookie name (defaults to admin_token)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| {
            error!("JWT_SECRET environment variable not found");
            ConfigError::EnvVarNotFound("JWT_SECRET".to_string())
        })?;
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let expiration_minutes = env::var("JWT_EXPIRY_MINUTES")
            .unwrap_or_else(|_| {
                warn!("JWT_EXPIRY_MINUTES not set, using default: 1440 minutes (1 day)");
                "1440".to_string()
            })
            .parse::<i64>()
            .map_err(|e| {
                error!("Invalid JWT_EXPIRY_MINUTES value: {}", e);
                ConfigError::InvalidValue(format!("JWT_EXPIRY_MINUTES: {}", e))
            })?;
        debug!("JWT expiration: {} minutes", expiration_minutes);

        let jwt_issuer = env::var("JWT_ISSUER").ok();
        let cookie_name = env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "admin_token".to_string());

        let config = JwtConfig {
            jwt_secret,
            expiration_minutes,
            jwt_issuer,
            cookie_name,
        };

        config.validate()?;
        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        debug!("Validating JWT configuration");

        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError(
                "JWT secret must be at least 32 characters long".to_string(),
            ));
        }

        if self.expiration_minutes <= 0 {
            error!("Token expiration must be greater than 0");
            return Err(ConfigError::ValidationError(
                "Token expiration must be greater than 0".to_string(),
            ));
        }

        if self.cookie_name.trim().is_empty() {
            return Err(ConfigError::ValidationError("Cookie name cannot be empty".to_string()));
        }

        debug!("JWT configuration validation passed");
        Ok(())
    }

    /// Lifetime in seconds, as used for the cookie Max-Age
    pub fn expiration_secs(&self) -> i64 {
        self.expiration_minutes * 60
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_should_be_long_enough_for_security_purposes".to_string(),
            expiration_minutes: 60,
            jwt_issuer: Some("showroom-backend-test".to_string()),
            cookie_name: "admin_token".to_string(),
        }
    }
}
