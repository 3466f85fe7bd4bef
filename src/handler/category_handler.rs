use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use crate::dto::category_dto::{CategoryListQuery, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::handler::{parse_filter, validate_payload};
use crate::service::category_service::{CategoryService, CategoryServiceImpl};
use crate::service::parse_object_id;
use crate::util::error::HandlerError;

pub async fn list_categories_handler(
    State(service): State<Arc<CategoryServiceImpl>>,
    Query(query): Query<CategoryListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let category_type = parse_filter(query.category_type.as_deref())?;
    let categories = service.list_categories(category_type).await?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect::<Vec<_>>()))
}

pub async fn get_category_handler(
    State(service): State<Arc<CategoryServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let category = service.get_category(parse_object_id(&id, "category")?).await?;
    Ok(Json(CategoryResponse::from(category)))
}

// Admin
pub async fn create_category_handler(
    State(service): State<Arc<CategoryServiceImpl>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let created = service.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(created))))
}

pub async fn update_category_handler(
    State(service): State<Arc<CategoryServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let updated = service
        .update_category(parse_object_id(&id, "category")?, payload)
        .await?;
    Ok(Json(CategoryResponse::from(updated)))
}

pub async fn delete_category_handler(
    State(service): State<Arc<CategoryServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_category(parse_object_id(&id, "category")?).await?;
    Ok(StatusCode::NO_CONTENT)
}
