use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{id_hex, validate_slug_input};
use crate::model::service_offering::ServiceOffering;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferingRequest {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "validate_slug_input"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[validate(range(min = 0.0, message = "startingPrice cannot be negative"))]
    pub starting_price: f64,
    pub price_unit: Option<String>,
    #[validate(length(min = 1, message = "deliveryTime is required"))]
    pub delivery_time: String,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferingRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_slug_input"))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    pub starting_price: Option<f64>,
    pub price_unit: Option<String>,
    #[validate(length(min = 1))]
    pub delivery_time: Option<String>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferingListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub features: Vec<String>,
    pub starting_price: f64,
    pub price_unit: Option<String>,
    pub delivery_time: String,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ServiceOffering> for OfferingResponse {
    fn from(s: ServiceOffering) -> Self {
        OfferingResponse {
            id: id_hex(&s.id),
            title: s.title,
            slug: s.slug,
            description: s.description,
            features: s.features,
            starting_price: s.starting_price,
            price_unit: s.price_unit,
            delivery_time: s.delivery_time,
            active: s.active,
            sort_order: s.sort_order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
