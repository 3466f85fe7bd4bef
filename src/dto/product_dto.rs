use serde::{Deserialize, Serialize};
use validator::Validate;

use super::id_hex;
use crate::model::product::Product;

/// `json` part of the product multipart form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "capacity is required"))]
    pub capacity: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    /// Externally hosted image; an uploaded `image` part takes precedence
    #[validate(url)]
    pub image_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub capacity: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub in_stock: Option<bool>,
}

/// Image part of a multipart request, already buffered
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub id: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub model: String,
    pub category: String,
    pub capacity: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub in_stock: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: id_hex(&p.id),
            name: p.name,
            model: p.model,
            category: p.category,
            capacity: p.capacity,
            price: p.price,
            image_url: p.image_url,
            description: p.description,
            features: p.features,
            in_stock: p.in_stock,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
