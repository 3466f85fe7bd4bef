use std::str::FromStr;
use tracing::info;

use crate::config::{optional_var, parsed_var, required_var, ConfigError};

/// Transport security for the SMTP connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain connection, for local relays such as MailHog
    None,
    StartTls,
    /// Implicit TLS, usually port 465
    Tls,
}

impl FromStr for SmtpSecurity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SmtpSecurity::None),
            "starttls" => Ok(SmtpSecurity::StartTls),
            "tls" => Ok(SmtpSecurity::Tls),
            other => Err(ConfigError::InvalidValue(format!(
                "SMTP_SECURITY={} (expected none, starttls or tls)",
                other
            ))),
        }
    }
}

/// SMTP settings for lead and booking notifications. Mail is disabled when
/// `SMTP_HOST` is unset.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub security: SmtpSecurity,
    pub from_email: String,
    pub from_name: String,
    pub timeout_secs: u64,
    /// Falls back to the company email in settings when unset
    pub notify_email: Option<String>,
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = EmailConfig::default();
        let security = match optional_var("SMTP_SECURITY") {
            Some(raw) => raw.parse()?,
            None => defaults.security,
        };

        let config = EmailConfig {
            smtp_host: required_var("SMTP_HOST")?,
            smtp_port: parsed_var("SMTP_PORT", defaults.smtp_port)?,
            smtp_username: optional_var("SMTP_USERNAME"),
            smtp_password: optional_var("SMTP_PASSWORD"),
            security,
            from_email: required_var("SMTP_FROM_EMAIL")?,
            from_name: optional_var("SMTP_FROM_NAME").unwrap_or(defaults.from_name),
            timeout_secs: parsed_var("SMTP_TIMEOUT", defaults.timeout_secs)?,
            notify_email: optional_var("NOTIFY_EMAIL"),
        };

        config.validate()?;
        info!(host = %config.smtp_host, port = config.smtp_port, "Email configuration loaded");
        Ok(config)
    }

    /// Local relay without auth or TLS
    pub fn from_test_env() -> Self {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            security: SmtpSecurity::None,
            from_email: "test@example.com".to_string(),
            from_name: "Showroom Test".to_string(),
            timeout_secs: 10,
            notify_email: Some("owner@example.com".to_string()),
            ..EmailConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.trim().is_empty() || self.smtp_port == 0 {
            return Err(ConfigError::ValidationError("SMTP host and port are required".to_string()));
        }
        if self.smtp_username.is_some() != self.smtp_password.is_some() {
            return Err(ConfigError::ValidationError(
                "SMTP_USERNAME and SMTP_PASSWORD must be set together".to_string(),
            ));
        }
        if !self.from_email.contains('@') {
            return Err(ConfigError::ValidationError("Invalid SMTP_FROM_EMAIL".to_string()));
        }
        if matches!(&self.notify_email, Some(addr) if !addr.contains('@')) {
            return Err(ConfigError::ValidationError("Invalid NOTIFY_EMAIL".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError("SMTP_TIMEOUT must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.smtp_username, &self.smtp_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            security: SmtpSecurity::StartTls,
            from_email: "noreply@example.com".to_string(),
            from_name: "Showroom".to_string(),
            timeout_secs: 30,
            notify_email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config_is_valid() {
        let config = EmailConfig::from_test_env();
        assert!(config.validate().is_ok());
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_default_has_no_host() {
        assert!(EmailConfig::default().validate().is_err());
    }

    #[test]
    fn test_parse_security() {
        assert_eq!("STARTTLS".parse::<SmtpSecurity>().unwrap(), SmtpSecurity::StartTls);
        assert_eq!("none".parse::<SmtpSecurity>().unwrap(), SmtpSecurity::None);
        assert!("ssl3".parse::<SmtpSecurity>().is_err());
    }

    #[test]
    fn test_credentials_must_be_paired() {
        let mut config = EmailConfig::from_test_env();
        config.smtp_username = Some("mailer".to_string());
        assert!(config.validate().is_err());

        config.smtp_password = Some("secret".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.credentials(), Some(("mailer", "secret")));
    }

    #[test]
    fn test_validate_invalid_addresses() {
        let mut config = EmailConfig::from_test_env();
        config.from_email = "invalid-email".to_string();
        assert!(config.validate().is_err());

        let mut config = EmailConfig::from_test_env();
        config.notify_email = Some("nobody".to_string());
        assert!(config.validate().is_err());
    }
}
