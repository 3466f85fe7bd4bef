use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use crate::dto::booking_dto::{BookingCreatedResponse, BookingListQuery, BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::pagination::PageParams;
use crate::dto::parse_enum;
use crate::dto::product_dto::IdQuery;
use crate::handler::{parse_filter, validate_payload};
use crate::service::booking_service::{BookingService, BookingServiceImpl};
use crate::service::parse_object_id;
use crate::util::error::HandlerError;

// Public booking form
pub async fn submit_booking_handler(
    State(service): State<Arc<BookingServiceImpl>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let receipt = service.submit_booking(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            booking: BookingResponse::from(receipt.booking),
            whatsapp_url: receipt.whatsapp_url,
        }),
    ))
}

// Admin
pub async fn list_bookings_handler(
    State(service): State<Arc<BookingServiceImpl>>,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let status = parse_filter(query.status.as_deref())?;
    let page = service
        .list_bookings(status, PageParams::new(query.page, query.limit))
        .await?;
    Ok(Json(page.map(BookingResponse::from)))
}

pub async fn update_booking_status_handler(
    State(service): State<Arc<BookingServiceImpl>>,
    Query(query): Query<IdQuery>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&query.id, "booking")?;
    validate_payload(&payload)?;
    let updated = service
        .update_booking_status(id, parse_enum(&payload.status)?)
        .await?;
    Ok(Json(BookingResponse::from(updated)))
}

pub async fn delete_booking_handler(
    State(service): State<Arc<BookingServiceImpl>>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_booking(parse_object_id(&query.id, "booking")?).await?;
    Ok(StatusCode::NO_CONTENT)
}
