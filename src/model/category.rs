use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryType {
    Project,
    Service,
    Product,
}

string_enum!(CategoryType {
    Project => "project",
    Service => "service",
    Product => "product",
});

/// Grouping for projects and products. Referenced by slug; the slug is
/// fixed at creation so references never dangle on rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
