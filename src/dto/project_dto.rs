use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{id_hex, validate_project_status, validate_slug_input};
use crate::model::project::{Project, ProjectStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "validate_slug_input"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(custom(function = "validate_project_status"))]
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[validate(url)]
    pub live_url: Option<String>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_slug_input"))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(custom(function = "validate_project_status"))]
    pub status: Option<String>,
    pub featured: Option<bool>,
    #[validate(url)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub images: Vec<String>,
    pub category: String,
    pub status: ProjectStatus,
    pub featured: bool,
    pub live_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        ProjectResponse {
            id: id_hex(&p.id),
            title: p.title,
            slug: p.slug,
            description: p.description,
            tech_stack: p.tech_stack,
            images: p.images,
            category: p.category,
            status: p.status,
            featured: p.featured,
            live_url: p.live_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
