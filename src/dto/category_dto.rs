use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{id_hex, validate_category_type, validate_slug_input};
use crate::model::category::{Category, CategoryType};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_slug_input"))]
    pub slug: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_category_type"))]
    pub category_type: String,
    pub description: Option<String>,
}

/// Slug and type are fixed once created
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryListQuery {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        CategoryResponse {
            id: id_hex(&c.id),
            name: c.name,
            slug: c.slug,
            category_type: c.category_type,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
