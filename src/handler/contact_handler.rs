use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use crate::dto::contact_dto::{ContactListQuery, ContactResponse, CreateContactRequest, UpdateContactStatusRequest};
use crate::dto::pagination::PageParams;
use crate::dto::parse_enum;
use crate::handler::{parse_filter, validate_payload};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::service::parse_object_id;
use crate::util::error::HandlerError;

// Public contact form
pub async fn submit_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let created = service.submit_contact(payload).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(created))))
}

// Admin
pub async fn list_contacts_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let status = parse_filter(query.status.as_deref())?;
    let page = service
        .list_contacts(status, PageParams::new(query.page, query.limit))
        .await?;
    Ok(Json(page.map(ContactResponse::from)))
}

pub async fn get_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let contact = service.get_contact(parse_object_id(&id, "contact")?).await?;
    Ok(Json(ContactResponse::from(contact)))
}

pub async fn update_contact_status_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contact")?;
    validate_payload(&payload)?;
    let updated = service
        .update_contact_status(id, parse_enum(&payload.status)?)
        .await?;
    Ok(Json(ContactResponse::from(updated)))
}

pub async fn delete_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_contact(parse_object_id(&id, "contact")?).await?;
    Ok(StatusCode::NO_CONTENT)
}
