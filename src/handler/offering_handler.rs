use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use crate::dto::offering_dto::{CreateOfferingRequest, OfferingListQuery, OfferingResponse, UpdateOfferingRequest};
use crate::dto::pagination::PageParams;
use crate::handler::validate_payload;
use crate::repository::offering_repo::OfferingFilter;
use crate::service::offering_service::{OfferingService, OfferingServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_offerings_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Query(query): Query<OfferingListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let filter = OfferingFilter { active: query.active };
    let page = service
        .list_offerings(filter, PageParams::new(query.page, query.limit))
        .await?;
    Ok(Json(page.map(OfferingResponse::from)))
}

pub async fn get_offering_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(OfferingResponse::from(service.get_offering(&slug).await?)))
}

pub async fn create_offering_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Json(payload): Json<CreateOfferingRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let created = service.create_offering(payload).await?;
    Ok((StatusCode::CREATED, Json(OfferingResponse::from(created))))
}

pub async fn update_offering_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateOfferingRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let updated = service.update_offering(&slug, payload).await?;
    Ok(Json(OfferingResponse::from(updated)))
}

pub async fn delete_offering_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_offering(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
