use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use crate::dto::pagination::PageParams;
use crate::dto::project_dto::{CreateProjectRequest, ProjectListQuery, ProjectResponse, UpdateProjectRequest};
use crate::handler::{parse_filter, validate_payload};
use crate::repository::project_repo::ProjectFilter;
use crate::service::project_service::{ProjectService, ProjectServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_projects_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Query(query): Query<ProjectListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let filter = ProjectFilter {
        status: parse_filter(query.status.as_deref())?,
        category: query.category.filter(|c| !c.is_empty()),
        featured: query.featured,
    };
    let page = service
        .list_projects(filter, PageParams::new(query.page, query.limit))
        .await?;
    Ok(Json(page.map(ProjectResponse::from)))
}

pub async fn get_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let project = service.get_project(&slug).await?;
    Ok(Json(ProjectResponse::from(project)))
}

// Admin
pub async fn create_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let created = service.create_project(payload).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(created))))
}

pub async fn update_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let updated = service.update_project(&slug, payload).await?;
    Ok(Json(ProjectResponse::from(updated)))
}

pub async fn delete_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_project(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
