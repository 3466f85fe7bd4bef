pub mod minio_conf;
pub mod jwt_conf;
pub mod email_conf;
pub mod mongo_conf;
pub mod admin_user_conf;
pub mod app_conf;

pub use minio_conf::MinioConfig;
pub use jwt_conf::JwtConfig;
pub use email_conf::EmailConfig;
pub use mongo_conf::MongoConfig;
pub use admin_user_conf::AdminUserConfig;
pub use app_conf::AppConfig;

/// Required variable; blank counts as missing.
pub(crate) fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::EnvVarNotFound(name.to_string()))
}

pub(crate) fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parsed variable, or `default` when unset.
pub(crate) fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("{}={}", name, raw))),
        None => Ok(default),
    }
}

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
    
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Parse error: {0}")]
    ParseError(String),
}
