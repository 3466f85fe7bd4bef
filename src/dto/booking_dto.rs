use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{id_hex, validate_booking_status, validate_date};
use crate::model::booking::{BookingRequest, BookingStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 2, max = 100, message = "customerName is required"))]
    pub customer_name: String,
    #[validate(length(min = 6, max = 20, message = "customerPhone must be between 6 and 20 characters"))]
    pub customer_phone: String,
    #[validate(email)]
    pub customer_email: Option<String>,
    #[validate(custom(function = "validate_date"))]
    pub preferred_date: String,
    #[validate(length(min = 5, max = 300, message = "address is required"))]
    pub address: String,
    #[validate(length(equal = 24))]
    pub product_id: Option<String>,
    #[validate(length(min = 1, max = 100, message = "productModel is required"))]
    pub product_model: String,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(custom(function = "validate_booking_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub preferred_date: String,
    pub address: String,
    pub product_id: Option<String>,
    pub product_model: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<BookingRequest> for BookingResponse {
    fn from(b: BookingRequest) -> Self {
        BookingResponse {
            id: id_hex(&b.id),
            customer_name: b.customer_name,
            customer_phone: b.customer_phone,
            customer_email: b.customer_email,
            preferred_date: b.preferred_date,
            address: b.address,
            product_id: b.product_id.map(|oid| oid.to_hex()),
            product_model: b.product_model,
            notes: b.notes,
            status: b.status,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Public booking response: the stored booking plus the WhatsApp hand-off link
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking: BookingResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}
