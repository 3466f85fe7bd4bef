use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation, Algorithm};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use crate::config::JwtConfig;

/// JWT token claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (admin user ID)
    pub sub: String,
    pub email: String,
    /// Staff role (admin, editor)
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// JWT ID (unique identifier for the token)
    pub jti: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Signed session token plus its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// Error types for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
}


pub trait JwtTokenUtils {
    fn generate_session_token(&self, user_id: &str, email: &str, role: &str) -> Result<SessionToken, JwtError>;
    fn validate_session_token(&self, token: &str) -> Result<Claims, JwtError>;
    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError>;
    fn check_role_permission(&self, user_role: &str, required_role: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
}

impl JwtTokenUtilsImpl {

    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenUtilsImpl {
            jwt_config,
        }
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        encode(&header, claims, &encoding_key).map_err(|err| {
            error!("Failed to encode JWT token: {}", err);
            JwtError::EncodingFailed(err.to_string())
        })
    }

    /// Issue a token with an explicit lifetime; negative values produce an already-expired token.
    pub fn generate_token_with_lifetime(&self, user_id: &str, email: &str, role: &str, lifetime: Duration) -> Result<String, JwtError> {
        debug!("Generating session token for user: {} with role: {}", user_id, role);

        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: self.jwt_config.jwt_issuer.clone(),
        };

        let token = self.encode_claims(&claims)?;
        info!("Successfully generated session token for user: {}", user_id);
        Ok(token)
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {

    fn generate_session_token(&self, user_id: &str, email: &str, role: &str) -> Result<SessionToken, JwtError> {
        let token = self.generate_token_with_lifetime(
            user_id,
            email,
            role,
            Duration::minutes(self.jwt_config.expiration_minutes),
        )?;
        Ok(SessionToken {
            token,
            expires_in: self.jwt_config.expiration_secs(),
            token_type: "Bearer".to_string(),
        })
    }

    fn validate_session_token(&self, token: &str) -> Result<Claims, JwtError> {
        debug!("Validating JWT token");

        let decoding_key = DecodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        if let Some(ref issuer) = self.jwt_config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }

        match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let claims = token_data.claims;
                if claims.exp < Utc::now().timestamp() {
                    warn!("Token has expired for user: {}", claims.sub);
                    return Err(JwtError::TokenExpired);
                }
                debug!("Token validation successful for user: {}", claims.sub);
                Ok(claims)
            }
            Err(err) => {
                if matches!(err.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature) {
                    warn!("Token has expired");
                    return Err(JwtError::TokenExpired);
                }
                error!("Failed to decode JWT token: {}", err);
                Err(JwtError::DecodingFailed(err.to_string()))
            }
        }
    }

    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError> {
        debug!("Extracting token from authorization header");

        if !auth_header.starts_with("Bearer ") {
            error!("Invalid authorization header format");
            return Err(JwtError::InvalidToken);
        }

        let token = auth_header.trim_start_matches("Bearer ").trim();

        if token.is_empty() {
            error!("Empty token in authorization header");
            return Err(JwtError::InvalidToken);
        }

        Ok(token.to_string())
    }

    fn check_role_permission(&self, user_role: &str, required_role: &str) -> bool {
        match (user_role, required_role) {
            // Admin has access to everything
            ("admin", _) => true,
            // Editors manage content but not site settings
            ("editor", "editor") => true,
            _ => false,
        }
    }

}
