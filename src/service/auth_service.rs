use crate::dto::auth_dto::{AdminUserResponse, LoginResponse, SessionResponse};
use crate::model::user::{AdminRole, AdminUser};
use crate::repository::user_repo::AdminUserRepository;
use crate::service::parse_object_id;
use crate::util::error::ServiceError;
use crate::util::jwt::{Claims, JwtTokenUtils, JwtTokenUtilsImpl};
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Account to create when it does not exist yet
#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: AdminRole,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError>;
    /// Account behind already-validated claims
    async fn session(&self, claims: &Claims) -> Result<SessionResponse, ServiceError>;
    /// Creates the account unless the email is taken; `true` when created
    async fn ensure_admin_user(&self, user: NewAdminUser) -> Result<bool, ServiceError>;
}

pub struct AuthServiceImpl {
    pub user_repo: Arc<dyn AdminUserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl AuthServiceImpl {
    pub fn new(user_repo: Arc<dyn AdminUserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self { user_repo, jwt_utils }
    }
}

fn invalid_credentials() -> ServiceError {
    ServiceError::Unauthorized("Invalid email or password".to_string())
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        info!("Admin login attempt");
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("Login for unknown email");
                return Err(invalid_credentials());
            }
        };

        let valid = PasswordUtilsImpl::verify_password(password, &user.password_hash).map_err(|e| {
            error!("Stored password hash is unusable: {}", e);
            ServiceError::InternalError(format!("Password verify error: {}", e))
        })?;
        if !valid {
            warn!("Wrong password for admin login");
            return Err(invalid_credentials());
        }

        let session = self
            .jwt_utils
            .generate_session_token(&crate::dto::id_hex(&user.id), &user.email, user.role.as_str())
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;

        info!("Admin logged in successfully");
        Ok(LoginResponse {
            token: session.token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: AdminUserResponse::from(user),
        })
    }

    #[instrument(skip(self, claims), fields(sub = %claims.sub))]
    async fn session(&self, claims: &Claims) -> Result<SessionResponse, ServiceError> {
        let id = parse_object_id(&claims.sub, "user")
            .map_err(|_| ServiceError::Unauthorized("Invalid session".to_string()))?;
        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Account no longer exists".to_string()))?;
        Ok(SessionResponse {
            user: AdminUserResponse::from(user),
            expires_at: claims.exp,
        })
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn ensure_admin_user(&self, user: NewAdminUser) -> Result<bool, ServiceError> {
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            info!("Admin user already exists, skipping creation");
            return Ok(false);
        }

        let password_hash = PasswordUtilsImpl::hash_password(&user.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        self.user_repo
            .insert(AdminUser {
                id: None,
                email: user.email,
                name: user.name,
                password_hash,
                role: user.role,
                created_at: None,
                updated_at: None,
            })
            .await?;
        info!("Admin user created");
        Ok(true)
    }
}
