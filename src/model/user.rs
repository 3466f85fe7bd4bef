use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminRole {
    Admin,
    Editor,
}

string_enum!(AdminRole {
    Admin => "admin",
    Editor => "editor",
});

/// Back-office account. Email is stored lowercased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
