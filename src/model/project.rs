use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    Published,
}

string_enum!(ProjectStatus {
    Draft => "draft",
    Published => "published",
});

/// Portfolio entry shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Slug of an existing category, normalized on write
    pub category: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    pub live_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
