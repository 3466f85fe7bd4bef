use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Contacted,
    Scheduled,
    Completed,
    Cancelled,
}

string_enum!(BookingStatus {
    Pending => "pending",
    Contacted => "contacted",
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Request to install a purchased product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    /// YYYY-MM-DD
    pub preferred_date: String,
    pub address: String,
    pub product_id: Option<ObjectId>,
    pub product_model: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_and_rejection() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), *status);
        }
        let err = "done".parse::<BookingStatus>().unwrap_err();
        assert!(err.contains("pending"));
    }
}
