use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Catalog product (collection page entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Manufacturer model reference, quoted in bookings
    pub model: String,
    /// Slug of an existing category, normalized on write
    pub category: String,
    /// Free-form capacity, e.g. "300 L" or "12000 BTU"
    pub capacity: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_in_stock() -> bool {
    true
}
