use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A service the business sells ("Services" page entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub starting_price: f64,
    /// e.g. "per project", "per month"
    pub price_unit: Option<String>,
    pub delivery_time: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}
