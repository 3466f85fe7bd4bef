use serde::{Deserialize, Serialize};
use validator::Validate;

use super::id_hex;
use crate::model::user::{AdminRole, AdminUser};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Admin user as exposed over HTTP, never with the hash
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

impl From<AdminUser> for AdminUserResponse {
    fn from(u: AdminUser) -> Self {
        AdminUserResponse {
            id: id_hex(&u.id),
            email: u.email,
            name: u.name,
            role: u.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AdminUserResponse,
}

/// Current session: the account behind the token and when the token lapses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: AdminUserResponse,
    pub expires_at: i64,
}
